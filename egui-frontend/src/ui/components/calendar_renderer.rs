//! # Calendar Renderer Module
//!
//! Renders the month grid: weekday row, day cells in full-week rows, the
//! only-pending filter toggle and the availability line.
//!
//! ## Key Functions:
//! - `grid_cells()` - Compute the full-week cell range for a month
//! - `render_calendar()` - Weekday row plus day grid
//! - `render_filter_toggle()` / `render_availability_line()`
//!
//! ## Cell states:
//! A cell is muted when it belongs to an adjacent month (shown only for
//! grid completeness), outlined when it is the selected day, and filled
//! when the day's occupancy entry matches the target room and passes the
//! only-pending filter. Occupied cells show the occupant's name on hover.
//! Clicking any cell selects it, in-month or not.

use chrono::{Datelike, Duration, NaiveDate};
use eframe::egui;

use crate::ui::app_state::OccupancyCalendarApp;
use crate::ui::occupancy::highlighted_booking;

/// Spacing in pixels between day cells and weekday headers.
const CALENDAR_CARD_SPACING: f32 = 5.0;

/// Weekday labels, Monday-first to match chrono's week numbering.
const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

// Cell palette
const CELL_FILL: egui::Color32 = egui::Color32::WHITE;
const MUTED_FILL: egui::Color32 = egui::Color32::from_rgb(235, 235, 235);
const OCCUPIED_FILL: egui::Color32 = egui::Color32::from_rgb(244, 194, 194);
const CELL_BORDER: egui::Color32 = egui::Color32::from_rgb(200, 200, 200);
const SELECTED_BORDER: egui::Color32 = egui::Color32::from_rgb(70, 130, 180);

/// A single cell of the rendered day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    /// Day-of-month number shown in the cell (of the cell's own month)
    pub day_number: u32,
    /// The full date of this cell
    pub date: NaiveDate,
    /// Whether the cell belongs to the displayed month (false for the
    /// leading/trailing filler days of adjacent months)
    pub in_month: bool,
}

/// Compute the day grid for a month: every full week intersecting it.
///
/// The grid runs from the Monday on or before the month's first day to
/// the Sunday on or after its last day, so the cell count is always a
/// multiple of seven. An invalid year/month yields an empty grid.
pub fn grid_cells(year: i32, month: u32) -> Vec<CalendarCell> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let Some(next_first) = next_first else {
        return Vec::new();
    };
    let last = next_first - Duration::days(1);

    let start = first - Duration::days(first.weekday().num_days_from_monday() as i64);
    let end = last + Duration::days((6 - last.weekday().num_days_from_monday()) as i64);

    start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|date| CalendarCell {
            day_number: date.day(),
            date,
            in_month: date.year() == year && date.month() == month,
        })
        .collect()
}

impl OccupancyCalendarApp {
    /// Render the weekday row and the day grid for the displayed month.
    pub fn render_calendar(&mut self, ui: &mut egui::Ui) {
        // Cell dimensions derived from the available width, capped so the
        // grid stays readable on very wide windows
        let total_spacing = CALENDAR_CARD_SPACING * 6.0;
        let cell_width = ((ui.available_width() - total_spacing) / 7.0).min(160.0);
        let cell_height = cell_width * 0.8;
        let header_height = (cell_height * 0.4).max(22.0);

        self.render_weekday_row(ui, cell_width, header_height);
        ui.add_space(CALENDAR_CARD_SPACING);
        self.render_day_grid(ui, cell_width, cell_height);
    }

    /// Seven weekday labels above the grid, Monday first.
    fn render_weekday_row(&self, ui: &mut egui::Ui, cell_width: f32, header_height: f32) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = CALENDAR_CARD_SPACING;
            for day_name in WEEKDAY_NAMES {
                ui.allocate_ui_with_layout(
                    egui::vec2(cell_width, header_height),
                    egui::Layout::centered_and_justified(egui::Direction::TopDown),
                    |ui| {
                        let header_rect = ui.available_rect_before_wrap();
                        ui.painter().rect_filled(
                            header_rect,
                            egui::Rounding::same(2.0),
                            egui::Color32::from_rgba_unmultiplied(255, 255, 255, 180),
                        );
                        ui.painter().rect_stroke(
                            header_rect,
                            egui::Rounding::same(2.0),
                            egui::Stroke::new(1.0, CELL_BORDER),
                        );
                        ui.label(
                            egui::RichText::new(day_name)
                                .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                                .strong()
                                .color(egui::Color32::DARK_GRAY),
                        );
                    },
                );
            }
        });
    }

    /// Day cells in rows of seven covering every week of the month.
    fn render_day_grid(&mut self, ui: &mut egui::Ui, cell_width: f32, cell_height: f32) {
        ui.spacing_mut().item_spacing.y = CALENDAR_CARD_SPACING;

        let cells = grid_cells(self.calendar.selected_year, self.calendar.selected_month);
        let mut clicked_day: Option<NaiveDate> = None;

        for week in cells.chunks(7) {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = CALENDAR_CARD_SPACING;
                for cell in week {
                    if self.draw_day_cell(ui, cell, cell_width, cell_height).clicked() {
                        clicked_day = Some(cell.date);
                    }
                }
            });
        }

        // Selection may land on a filler day of an adjacent month; that is
        // allowed and survives month navigation
        if let Some(date) = clicked_day {
            log::info!("Selected day: {}", date);
            self.calendar.selected_day = date;
        }
    }

    /// Draw one day cell and report its click response.
    fn draw_day_cell(
        &self,
        ui: &mut egui::Ui,
        cell: &CalendarCell,
        width: f32,
        height: f32,
    ) -> egui::Response {
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::click());

        // The occupancy map covers only the displayed month; filler cells
        // never consult it, so an adjacent month's day sharing the same
        // day-of-month number cannot pick up its highlight
        let entry = if cell.in_month {
            self.occupancy.entry(cell.day_number)
        } else {
            None
        };
        let occupied = highlighted_booking(entry, &self.target_room, self.calendar.only_pending);
        let is_selected = cell.date == self.calendar.selected_day;

        let fill = if occupied.is_some() {
            OCCUPIED_FILL
        } else if !cell.in_month {
            MUTED_FILL
        } else {
            CELL_FILL
        };
        ui.painter()
            .rect_filled(rect, egui::Rounding::same(2.0), fill);

        let stroke = if is_selected {
            egui::Stroke::new(2.0, SELECTED_BORDER)
        } else {
            egui::Stroke::new(0.5, CELL_BORDER)
        };
        ui.painter()
            .rect_stroke(rect, egui::Rounding::same(2.0), stroke);

        let number_color = if !cell.in_month {
            egui::Color32::from_rgb(150, 150, 150)
        } else {
            egui::Color32::BLACK
        };
        ui.painter().text(
            rect.min + egui::vec2(6.0, 4.0),
            egui::Align2::LEFT_TOP,
            cell.day_number.to_string(),
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
            number_color,
        );

        match occupied {
            Some(registration) => response.on_hover_text(&registration.full_name),
            None => response,
        }
    }

    /// Checkbox restricting occupancy highlighting to pending bookings.
    ///
    /// Toggling re-renders the cells only; it neither re-issues the fetch
    /// nor rebuilds the occupancy map.
    pub fn render_filter_toggle(&mut self, ui: &mut egui::Ui) {
        ui.checkbox(&mut self.calendar.only_pending, "Show only pending");
    }

    /// "N available nights" for the displayed month and target room.
    pub fn render_availability_line(&self, ui: &mut egui::Ui) {
        let available = self.occupancy.available_nights(&self.target_room);
        ui.label(format!("{} available nights", available));
    }
}
