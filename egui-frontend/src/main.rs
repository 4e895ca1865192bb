use eframe::egui;
use log::info;

mod config;
mod services;
mod ui;

use ui::OccupancyCalendarApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting occupancy calendar egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 720.0])
            .with_min_inner_size([640.0, 520.0])
            .with_title("Room Occupancy Calendar")
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Room Occupancy Calendar",
        options,
        Box::new(|cc| Ok(Box::new(OccupancyCalendarApp::new(cc)))),
    )
}
