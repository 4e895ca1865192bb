//! # App State Module
//!
//! Central application state for the occupancy calendar.
//!
//! ## Purpose:
//! `OccupancyCalendarApp` holds everything the widget needs in one place:
//! the target room from configuration, the fetch state of the booking
//! list, the occupancy projection for the displayed month, and the
//! calendar view state. All of it lives on the UI thread; the only other
//! thread in the program is the one-shot fetch, which communicates back
//! through the channel held here.

use std::sync::mpsc::{self, Receiver};

use log::{error, info};

use crate::config::{Config, DEFAULT_TARGET_ROOM};
use crate::services::api::{self, FetchResult};
use crate::ui::occupancy::{OccupancyKey, OccupancyMap};
use crate::ui::state::{CalendarState, RegistrationsState};

/// Main application struct for the egui occupancy calendar.
pub struct OccupancyCalendarApp {
    /// Room whose occupancy is highlighted (from configuration)
    pub target_room: String,

    /// Fetch state of the booking list
    pub registrations: RegistrationsState,
    /// Bumped every time a fetch result is stored; part of the occupancy
    /// dependency key
    pub registrations_version: u64,

    /// Per-day occupancy for the displayed month
    pub occupancy: OccupancyMap,

    /// Month navigation, selection and filter state
    pub calendar: CalendarState,

    /// Receiver for the in-flight fetch; dropped once the result arrives
    pub(crate) fetch_rx: Option<Receiver<FetchResult>>,
}

impl OccupancyCalendarApp {
    /// Create the app and kick off the single registrations fetch.
    ///
    /// A configuration error does not abort startup: the calendar still
    /// renders (with empty occupancy) and the error is shown where the
    /// fetch failure would be.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        info!("Initializing occupancy calendar");

        match Config::from_env() {
            Ok(config) => {
                let (tx, rx) = mpsc::channel();
                api::spawn_registrations_fetch(&config, cc.egui_ctx.clone(), tx);

                Self {
                    target_room: config.target_room,
                    registrations: RegistrationsState::Loading,
                    registrations_version: 0,
                    occupancy: OccupancyMap::default(),
                    calendar: CalendarState::new(),
                    fetch_rx: Some(rx),
                }
            }
            Err(e) => {
                error!("Configuration error: {:#}", e);

                Self {
                    target_room: DEFAULT_TARGET_ROOM.to_string(),
                    registrations: RegistrationsState::Failed(format!("{:#}", e)),
                    registrations_version: 0,
                    occupancy: OccupancyMap::default(),
                    calendar: CalendarState::new(),
                    fetch_rx: None,
                }
            }
        }
    }

    /// Dependency key the occupancy map must currently be built from.
    pub fn occupancy_key(&self) -> OccupancyKey {
        OccupancyKey {
            year: self.calendar.selected_year,
            month: self.calendar.selected_month,
            registrations_version: self.registrations_version,
        }
    }
}
