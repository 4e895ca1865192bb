//! # UI State Module
//!
//! Delivery state of the one-shot registrations fetch, as seen by the
//! rendering layer. A failed fetch is an explicit state rendered as an
//! error line, not a silently empty booking list; occupancy still
//! degrades to "no occupancy anywhere" either way.

use shared::Registration;

/// Where the registrations fetch currently stands.
#[derive(Debug)]
pub enum RegistrationsState {
    /// The request is still in flight (or about to be issued)
    Loading,
    /// The booking list as returned by the API
    Loaded(Vec<Registration>),
    /// The request failed; the message is shown to the user
    Failed(String),
}

impl RegistrationsState {
    /// The booking list, empty unless loaded.
    pub fn registrations(&self) -> &[Registration] {
        match self {
            RegistrationsState::Loaded(registrations) => registrations,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RegistrationsState::Loading)
    }

    /// Error message to display, if the fetch failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            RegistrationsState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
