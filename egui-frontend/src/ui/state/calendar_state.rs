//! # Calendar State Module
//!
//! All state related to the calendar view and navigation.
//!
//! ## Responsibilities:
//! - Displayed month/year and unbounded month navigation
//! - The selected day
//! - The only-pending filter flag
//!
//! Everything here is mutated only by user interaction on the UI thread;
//! nothing is persisted across sessions.

use chrono::{Datelike, NaiveDate};

/// Calendar-specific state for month navigation and display.
#[derive(Debug)]
pub struct CalendarState {
    /// Displayed month (1-12)
    pub selected_month: u32,
    /// Displayed year
    pub selected_year: i32,
    /// Currently selected day; may fall outside the displayed month
    pub selected_day: NaiveDate,
    /// Restrict occupancy highlighting to pending bookings
    pub only_pending: bool,
}

impl CalendarState {
    /// Create new calendar state showing the current month, with today
    /// selected.
    pub fn new() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            selected_month: today.month(),
            selected_year: today.year(),
            selected_day: today,
            only_pending: false,
        }
    }

    /// Navigate to the previous month, rolling the year at January.
    pub fn navigate_to_previous_month(&mut self) {
        if self.selected_month == 1 {
            self.selected_month = 12;
            self.selected_year -= 1;
        } else {
            self.selected_month -= 1;
        }
        log::info!(
            "Navigated to previous month: {}/{}",
            self.selected_month,
            self.selected_year
        );
    }

    /// Navigate to the next month, rolling the year at December.
    pub fn navigate_to_next_month(&mut self) {
        if self.selected_month == 12 {
            self.selected_month = 1;
            self.selected_year += 1;
        } else {
            self.selected_month += 1;
        }
        log::info!(
            "Navigated to next month: {}/{}",
            self.selected_month,
            self.selected_year
        );
    }

    /// Get the displayed month's name for the header.
    pub fn month_name(&self) -> &'static str {
        match self.selected_month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Unknown",
        }
    }
}

impl Default for CalendarState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(year: i32, month: u32) -> CalendarState {
        CalendarState {
            selected_month: month,
            selected_year: year,
            selected_day: NaiveDate::from_ymd_opt(year, month, 15).unwrap(),
            only_pending: false,
        }
    }

    #[test]
    fn next_then_previous_returns_to_original_month() {
        let mut s = state(2025, 8);
        s.navigate_to_next_month();
        s.navigate_to_previous_month();
        assert_eq!((s.selected_year, s.selected_month), (2025, 8));
    }

    #[test]
    fn navigation_rolls_the_year() {
        let mut s = state(2025, 12);
        s.navigate_to_next_month();
        assert_eq!((s.selected_year, s.selected_month), (2026, 1));

        let mut s = state(2025, 1);
        s.navigate_to_previous_month();
        assert_eq!((s.selected_year, s.selected_month), (2024, 12));
    }

    #[test]
    fn navigation_does_not_touch_selection_or_filter() {
        let mut s = state(2025, 8);
        s.only_pending = true;
        let selected = s.selected_day;

        s.navigate_to_next_month();
        assert_eq!(s.selected_day, selected);
        assert!(s.only_pending);
    }

    #[test]
    fn month_names() {
        assert_eq!(state(2025, 1).month_name(), "January");
        assert_eq!(state(2025, 8).month_name(), "August");
        assert_eq!(state(2025, 12).month_name(), "December");
    }
}
