use eframe::egui;
use log::{error, info};

mod config;
mod ui;

use config::ScreenConfig;
use ui::app_state::HunterSettingsApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Hunter Settings egui application");

    // Roster configuration comes from an optional JSON file argument,
    // falling back to the built-in demo roster
    let (config, load_error) = match std::env::args().nth(1) {
        Some(path) => match ScreenConfig::load(&path) {
            Ok(config) => {
                info!("Loaded roster configuration from {}", path);
                (config, None)
            }
            Err(e) => {
                error!("Failed to load roster configuration from {}: {}", path, e);
                let message =
                    format!("Could not load {}; showing the demo roster ({})", path, e);
                (ScreenConfig::demo(), Some(message))
            }
        },
        None => (ScreenConfig::demo(), None),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Hunter Settings")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Hunter Settings",
        options,
        Box::new(move |cc| match HunterSettingsApp::new(cc, config) {
            Ok(mut app) => {
                info!("Successfully initialized Hunter Settings app");
                if let Some(message) = load_error {
                    app.ui.set_error(message);
                }
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
