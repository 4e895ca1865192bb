//! # Occupancy Projection Module
//!
//! Projects the fetched registration list onto the displayed month: for
//! every calendar day, which registration (if any) occupies it.
//!
//! ## Responsibilities:
//! - Build the per-day occupancy map for one month
//! - Decide when the map must be rebuilt (explicit dependency key)
//! - Count available nights for the target room
//! - Evaluate the per-cell highlight condition at render time
//!
//! The map is keyed by day-of-month and, after a build pass, holds exactly
//! one entry per calendar day of the displayed month. Lookups for days of
//! adjacent months shown as grid filler must not go through this map; the
//! renderer only consults it for in-month cells.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use log::debug;
use shared::Registration;

/// Dependency key the occupancy map is built from.
///
/// The map is recomputed iff this key changes: month navigation changes
/// `year`/`month`, a stored fetch result bumps `registrations_version`.
/// Nothing else (in particular the only-pending toggle) triggers a
/// rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyKey {
    pub year: i32,
    pub month: u32,
    pub registrations_version: u64,
}

/// Per-day occupancy for the displayed month.
#[derive(Debug, Default)]
pub struct OccupancyMap {
    built_from: Option<OccupancyKey>,
    days: BTreeMap<u32, Option<Registration>>,
}

impl OccupancyMap {
    /// Whether the map needs a rebuild for the given key.
    pub fn is_stale(&self, key: OccupancyKey) -> bool {
        self.built_from != Some(key)
    }

    /// Rebuild the map in full for the month in `key`.
    ///
    /// Every day from the month's first to its last gets an entry: the
    /// first registration in list order whose half-open interval covers
    /// the day, or `None`. First match wins; there is no overlap
    /// resolution beyond list order.
    pub fn rebuild(&mut self, key: OccupancyKey, registrations: &[Registration]) {
        self.days.clear();
        self.built_from = Some(key);

        let Some(first) = NaiveDate::from_ymd_opt(key.year, key.month, 1) else {
            return;
        };

        for day in first.iter_days().take_while(|d| d.month() == key.month) {
            let entry = registrations.iter().find(|r| r.covers(day)).cloned();
            self.days.insert(day.day(), entry);
        }

        debug!(
            "Rebuilt occupancy for {}/{}: {} days, {} occupied",
            key.month,
            key.year,
            self.days.len(),
            self.days.values().filter(|e| e.is_some()).count()
        );
    }

    /// The registration occupying the given in-month day, if any.
    pub fn entry(&self, day_of_month: u32) -> Option<&Registration> {
        self.days.get(&day_of_month).and_then(|slot| slot.as_ref())
    }

    /// Number of days the map currently covers.
    #[allow(dead_code)]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Nights without a conflicting booking for the target room.
    ///
    /// A day counts as available when it has no occupying registration at
    /// all, or when the occupying registration is for a different room.
    pub fn available_nights(&self, target_room: &str) -> usize {
        self.days
            .values()
            .filter(|slot| !matches!(slot, Some(r) if r.room == target_room))
            .count()
    }
}

/// Render-time highlight condition for one day cell.
///
/// A cell highlights as occupied when its occupancy entry is for the
/// target room and either the only-pending filter is off or the booking is
/// pending. Evaluated per cell on every frame; toggling the filter never
/// touches the map itself.
pub fn highlighted_booking<'a>(
    entry: Option<&'a Registration>,
    target_room: &str,
    only_pending: bool,
) -> Option<&'a Registration> {
    entry.filter(|r| r.room == target_room && (!only_pending || r.is_pending()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn registration(start: NaiveDate, end: NaiveDate, room: &str, status: &str) -> Registration {
        Registration {
            start_date: start,
            end_date: end,
            room: room.to_string(),
            status: status.to_string(),
            full_name: "A".to_string(),
        }
    }

    fn key(year: i32, month: u32, version: u64) -> OccupancyKey {
        OccupancyKey {
            year,
            month,
            registrations_version: version,
        }
    }

    #[test]
    fn builds_one_entry_per_day_of_month() {
        let mut map = OccupancyMap::default();
        map.rebuild(key(2025, 8, 0), &[]);
        assert_eq!(map.day_count(), 31);

        map.rebuild(key(2025, 2, 0), &[]);
        assert_eq!(map.day_count(), 28);

        map.rebuild(key(2024, 2, 0), &[]);
        assert_eq!(map.day_count(), 29);
    }

    #[test]
    fn projects_half_open_booking_interval() {
        let regs = vec![registration(
            date(2025, 8, 5),
            date(2025, 8, 8),
            "Room 5",
            "pending",
        )];

        let mut map = OccupancyMap::default();
        map.rebuild(key(2025, 8, 0), &regs);

        assert!(map.entry(4).is_none());
        assert!(map.entry(5).is_some());
        assert!(map.entry(6).is_some());
        assert!(map.entry(7).is_some());
        // End date is checkout day, not occupied
        assert!(map.entry(8).is_none());
    }

    #[test]
    fn first_registration_in_list_order_wins() {
        let regs = vec![
            registration(date(2025, 8, 5), date(2025, 8, 8), "Room 5", "pending"),
            registration(date(2025, 8, 6), date(2025, 8, 9), "Room 2", "confirmed"),
        ];

        let mut map = OccupancyMap::default();
        map.rebuild(key(2025, 8, 0), &regs);

        // Day 6 is covered by both; the first in list order controls it
        assert_eq!(map.entry(6).unwrap().room, "Room 5");
        // Day 8 is only covered by the second
        assert_eq!(map.entry(8).unwrap().room, "Room 2");
    }

    #[test]
    fn bookings_outside_the_month_leave_it_empty() {
        let regs = vec![registration(
            date(2025, 7, 10),
            date(2025, 7, 14),
            "Room 5",
            "pending",
        )];

        let mut map = OccupancyMap::default();
        map.rebuild(key(2025, 8, 0), &regs);

        assert_eq!(map.available_nights("Room 5"), 31);
        assert!((1..=31).all(|d| map.entry(d).is_none()));
    }

    #[test]
    fn booking_spanning_the_month_boundary_covers_leading_days() {
        let regs = vec![registration(
            date(2025, 7, 30),
            date(2025, 8, 3),
            "Room 5",
            "pending",
        )];

        let mut map = OccupancyMap::default();
        map.rebuild(key(2025, 8, 0), &regs);

        assert!(map.entry(1).is_some());
        assert!(map.entry(2).is_some());
        assert!(map.entry(3).is_none());
    }

    #[test]
    fn stale_only_when_key_changes() {
        let mut map = OccupancyMap::default();
        let k = key(2025, 8, 0);
        assert!(map.is_stale(k));

        map.rebuild(k, &[]);
        assert!(!map.is_stale(k));

        // Month change, year change, and a stored fetch each invalidate
        assert!(map.is_stale(key(2025, 9, 0)));
        assert!(map.is_stale(key(2026, 8, 0)));
        assert!(map.is_stale(key(2025, 8, 1)));
    }

    #[test]
    fn only_pending_toggle_changes_neither_selection_nor_key() {
        use crate::ui::state::CalendarState;

        let regs = vec![registration(
            date(2025, 8, 5),
            date(2025, 8, 8),
            "Room 5",
            "pending",
        )];

        let mut map = OccupancyMap::default();
        let k = key(2025, 8, 0);
        map.rebuild(k, &regs);

        let mut calendar = CalendarState {
            selected_month: 8,
            selected_year: 2025,
            selected_day: date(2025, 8, 6),
            only_pending: false,
        };
        let selected = calendar.selected_day;

        // Flipping the filter is a render-time concern: the dependency key
        // does not cover it, so the map stays fresh and the selection stays put
        calendar.only_pending = true;
        assert!(!map.is_stale(k));
        assert_eq!(calendar.selected_day, selected);

        calendar.only_pending = false;
        assert!(!map.is_stale(k));
        assert_eq!(calendar.selected_day, selected);
    }

    #[test]
    fn available_nights_ignores_other_rooms() {
        let regs = vec![
            registration(date(2025, 8, 5), date(2025, 8, 8), "Room 5", "pending"),
            registration(date(2025, 8, 10), date(2025, 8, 12), "Room 2", "confirmed"),
        ];

        let mut map = OccupancyMap::default();
        map.rebuild(key(2025, 8, 0), &regs);

        // 31 days, 3 nights taken by Room 5; the Room 2 booking does not conflict
        assert_eq!(map.available_nights("Room 5"), 28);
        assert_eq!(map.available_nights("Room 2"), 29);
        assert_eq!(map.available_nights("Room 9"), 31);
    }

    #[test]
    fn highlight_respects_room_and_pending_filter() {
        let pending = registration(date(2025, 8, 5), date(2025, 8, 8), "Room 5", "pending");
        let confirmed = registration(date(2025, 8, 5), date(2025, 8, 8), "Room 5", "confirmed");
        let other_room = registration(date(2025, 8, 5), date(2025, 8, 8), "Room 2", "pending");

        // Filter off: any target-room booking highlights
        assert!(highlighted_booking(Some(&pending), "Room 5", false).is_some());
        assert!(highlighted_booking(Some(&confirmed), "Room 5", false).is_some());
        assert!(highlighted_booking(Some(&other_room), "Room 5", false).is_none());

        // Filter on: only pending target-room bookings highlight
        assert!(highlighted_booking(Some(&pending), "Room 5", true).is_some());
        assert!(highlighted_booking(Some(&confirmed), "Room 5", true).is_none());

        assert!(highlighted_booking(None, "Room 5", false).is_none());
    }
}
