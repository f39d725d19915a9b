//! Entry point: initialize logging, then hand the window to eframe.

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stderr)] // startup logging failures have nowhere else to go
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

fn main() -> eframe::Result {
    // Logging failures should never keep the window from opening.
    if let Err(e) = stampbook::logging::init() {
        eprintln!("Failed to initialize logging: {e:#}");
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Stampbook")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([840.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "stampbook",
        native_options,
        Box::new(|cc| Ok(Box::new(stampbook::gui::StampbookApp::new(cc)))),
    )
}
