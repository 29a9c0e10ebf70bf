#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
mod app;
mod form;

use eframe::egui;
use log::LevelFilter;
use wa_map_maker::{locate::find_saved_levels, logger};

fn main() -> anyhow::Result<()> {
    logger::init(LevelFilter::Info)?;
    let saved_levels = find_saved_levels();
    if saved_levels.is_none() {
        log::debug!("SavedLevels folder not detected");
    }
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 320.0])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Worms Armageddon Map Converter",
        options,
        Box::new(|_cc| Ok(Box::new(app::MapMakerApp::new(saved_levels)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
