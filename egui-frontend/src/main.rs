use eframe::egui;
use log::{error, info};

use gofinances_egui::backend::{AppConfig, Backend};
use gofinances_egui::ui::GoFinancesApp;

fn main() -> Result<(), eframe::Error> {
    // Config is read before logging so its level can seed the default filter
    let config_result = AppConfig::load();
    let log_level = config_result
        .as_ref()
        .map(|config| config.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    info!("Starting GoFinances egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 760.0])
            .with_min_inner_size([380.0, 600.0])
            .with_title("GoFinances"),
        ..Default::default()
    };

    eframe::run_native(
        "GoFinances",
        options,
        Box::new(move |_cc| {
            let backend = config_result.and_then(Backend::new);
            match backend {
                Ok(backend) => {
                    info!("Successfully initialized GoFinances app");
                    Ok(Box::new(GoFinancesApp::new(backend)))
                }
                Err(e) => {
                    error!("Failed to initialize app: {:#}", e);
                    Err(format!("Failed to initialize app: {:#}", e).into())
                }
            }
        }),
    )
}
