//! Status Charts - Test Status Summary Charts & Interactive Viewer
//!
//! A Rust application for displaying test status summary charts.

use eframe::egui;
use status_charts::gui::StatusChartsApp;

fn main() -> eframe::Result<()> {
    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([980.0, 560.0])
            .with_min_inner_size([760.0, 480.0])
            .with_title("Status Charts"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Status Charts",
        options,
        Box::new(|cc| Ok(Box::new(StatusChartsApp::new(cc)))),
    )
}
