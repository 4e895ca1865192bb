//! # Data Loading Module
//!
//! Bridges the background fetch and the occupancy projection into the
//! update loop.
//!
//! ## Data Flow:
//! 1. The fetch thread sends its result down the channel
//! 2. `poll_registrations_fetch` stores it and bumps the version counter
//! 3. `refresh_occupancy` rebuilds the map iff the dependency key changed
//!
//! Both run once per frame from `eframe::App::update`; a frame with no
//! fetch result and no key change does nothing here.

use std::sync::mpsc::TryRecvError;

use log::{info, warn};

use crate::ui::app_state::OccupancyCalendarApp;
use crate::ui::state::RegistrationsState;

impl OccupancyCalendarApp {
    /// Poll the background fetch and store its result when it lands.
    pub fn poll_registrations_fetch(&mut self) {
        let Some(rx) = &self.fetch_rx else {
            return;
        };

        match rx.try_recv() {
            Ok(result) => {
                self.fetch_rx = None;
                match result {
                    Ok(registrations) => {
                        info!("Storing {} registrations", registrations.len());
                        self.registrations = RegistrationsState::Loaded(registrations);
                    }
                    Err(e) => {
                        self.registrations = RegistrationsState::Failed(e.to_string());
                    }
                }
                self.registrations_version += 1;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                // Fetch thread died without sending a result
                warn!("Registrations fetch ended without a result");
                self.fetch_rx = None;
                self.registrations =
                    RegistrationsState::Failed("fetch ended without a result".to_string());
                self.registrations_version += 1;
            }
        }
    }

    /// Rebuild the occupancy map when its dependency key changed.
    ///
    /// The key covers displayed month and booking-list version, so month
    /// navigation and fetch arrival each trigger exactly one rebuild and
    /// the only-pending toggle triggers none.
    pub fn refresh_occupancy(&mut self) {
        let key = self.occupancy_key();
        if self.occupancy.is_stale(key) {
            self.occupancy
                .rebuild(key, self.registrations.registrations());
        }
    }
}
