//! Environment-backed configuration for the booking API endpoint and the
//! room whose occupancy is visualized.
//!
//! The endpoint address and token are required; a missing value is
//! reported as an error at startup instead of being folded into a
//! malformed request URL. The target room is optional and defaults to
//! [`DEFAULT_TARGET_ROOM`].

use anyhow::{Context, Result};

/// Room shown when `OCCUPANCY_TARGET_ROOM` is not set.
pub const DEFAULT_TARGET_ROOM: &str = "Room 5";

/// Settings read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the booking API, e.g. `https://bookings.example.com`
    pub api_url: String,
    /// Access token appended to the registrations request
    pub api_token: String,
    /// Room whose occupancy is highlighted on the calendar
    pub target_room: String,
}

impl Config {
    /// Read configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let api_url =
            std::env::var("OCCUPANCY_API_URL").context("OCCUPANCY_API_URL is not set")?;
        let api_token =
            std::env::var("OCCUPANCY_API_TOKEN").context("OCCUPANCY_API_TOKEN is not set")?;
        let target_room = std::env::var("OCCUPANCY_TARGET_ROOM")
            .unwrap_or_else(|_| DEFAULT_TARGET_ROOM.to_string());

        Ok(Self {
            api_url,
            api_token,
            target_room,
        })
    }
}
