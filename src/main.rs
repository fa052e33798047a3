#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod error;
mod io;
mod logging;
mod model;
mod settings;
mod ui;

use tracing::info;

fn main() -> eframe::Result<()> {
    let settings = settings::Settings::load();
    logging::init(&settings.log_filter);

    let data_path = settings.data_path();
    info!(data = %data_path.display(), "starting ProjeX Manager");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 680.0])
            .with_min_inner_size([640.0, 400.0])
            .with_title("ProjeX Manager"),
        ..Default::default()
    };

    eframe::run_native(
        "ProjeX Manager",
        options,
        Box::new(move |cc| Ok(Box::new(app::ProjexApp::new(cc, data_path)))),
    )
}
