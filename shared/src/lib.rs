use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status value the booking API uses for reservations awaiting confirmation.
pub const STATUS_PENDING: &str = "pending";

/// A reservation entry as returned by the booking API.
///
/// The date range is half-open: `start_date` is the first occupied night,
/// `end_date` is the checkout day and is NOT occupied. Records are
/// deserialized once from the fetch response and never mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    /// First occupied night (inclusive)
    pub start_date: NaiveDate,
    /// Checkout day (exclusive)
    pub end_date: NaiveDate,
    /// Room identifier, e.g. "Room 5"
    pub room: String,
    /// Reservation status as on the wire, e.g. "pending" or "confirmed"
    pub status: String,
    /// Occupant display name, shown as a hover label on occupied days
    pub full_name: String,
}

impl Registration {
    /// Whether this reservation occupies the given night.
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day < self.end_date
    }

    /// Whether this reservation is still awaiting confirmation.
    pub fn is_pending(&self) -> bool {
        self.status == STATUS_PENDING
    }
}
