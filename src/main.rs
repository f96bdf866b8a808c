// AQI widget gallery
// Main entry point

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use aqi_widgets::services::settings::SettingsService;
use aqi_widgets::ui_egui::GalleryApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting AQI widget gallery");

    // An explicit settings path must load; the default location may be absent
    let settings = match std::env::args_os().nth(1) {
        Some(path) => {
            let service = SettingsService::new(PathBuf::from(path));
            service
                .get()
                .with_context(|| format!("loading settings from {:?}", service.path()))?
        }
        None => SettingsService::from_default_location().get_or_default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("AQI widgets")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "AQI widgets",
        options,
        Box::new(move |cc| Ok(Box::new(GalleryApp::new(cc, settings)))),
    )
    .map_err(|e| anyhow!("gallery exited with an error: {e}"))
}
