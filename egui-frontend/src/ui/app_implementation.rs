//! The eframe update loop: poll the fetch, refresh the projection, render
//! the widget. Rendering is a pure function of current state and runs in
//! full every frame.

use eframe::egui;

use crate::ui::app_state::OccupancyCalendarApp;

impl eframe::App for OccupancyCalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_registrations_fetch();
        self.refresh_occupancy();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_filter_toggle(ui);
            self.render_status_line(ui);
            ui.add_space(6.0);

            self.render_header(ui);
            ui.separator();

            self.render_calendar(ui);
            ui.add_space(8.0);
            self.render_availability_line(ui);
        });
    }
}

impl OccupancyCalendarApp {
    /// One line of fetch status above the calendar: an error in red when
    /// the fetch failed, a spinner while it is in flight, nothing once the
    /// data has loaded.
    fn render_status_line(&self, ui: &mut egui::Ui) {
        if let Some(message) = self.registrations.error_message() {
            ui.colored_label(egui::Color32::RED, message);
        } else if self.registrations.is_loading() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading registrations...");
            });
        }
    }
}
