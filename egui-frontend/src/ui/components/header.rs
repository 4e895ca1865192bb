//! Month navigation header: previous/next controls around the displayed
//! month and year. Navigation is unbounded in both directions.

use eframe::egui;

use crate::ui::app_state::OccupancyCalendarApp;

impl OccupancyCalendarApp {
    /// Render the calendar header with month navigation.
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .button(
                    egui::RichText::new("◀")
                        .font(egui::FontId::new(18.0, egui::FontFamily::Proportional)),
                )
                .clicked()
            {
                self.calendar.navigate_to_previous_month();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(
                        egui::RichText::new("▶")
                            .font(egui::FontId::new(18.0, egui::FontFamily::Proportional)),
                    )
                    .clicked()
                {
                    self.calendar.navigate_to_next_month();
                }

                // Center the month/year between the two controls
                ui.with_layout(
                    egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                    |ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "{} {}",
                                self.calendar.month_name(),
                                self.calendar.selected_year
                            ))
                            .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(egui::Color32::from_rgb(60, 60, 60)),
                        );
                    },
                );
            });
        });
    }
}
