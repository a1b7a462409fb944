#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the startup failure risk dashboard.
use eframe::egui;
use startup_risk::config::{self, DashboardConfig};
use startup_risk::dataset::{self, Dataset, cache};
use startup_risk::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use startup_risk::logging;

const WINDOW_TITLE: &str = "AI Startup Failure Prediction Dashboard";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loaded_config = config::load_or_default();
    let defaults = DashboardConfig::default();
    let settings = loaded_config.as_ref().unwrap_or(&defaults);

    if let Err(err) = logging::init(&settings.logging) {
        eprintln!("Logging disabled: {err}");
    }

    let startup = match &loaded_config {
        Ok(settings) => load_data(settings),
        Err(err) => Err(err.to_string()),
    };
    if let Err(message) = &startup {
        tracing::error!("Startup failed: {message}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_maximized(settings.window.maximized);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |_cc| match startup {
            Ok(dataset) => Ok(Box::new(EguiApp::new(dataset))),
            Err(message) => Ok(Box::new(LaunchError { message })),
        }),
    )?;
    Ok(())
}

fn load_data(settings: &DashboardConfig) -> Result<&'static Dataset, String> {
    let data_path = dataset::resolve_data_path(settings.dataset.path.as_deref());
    cache::load_shared(&data_path).map_err(|err| err.to_string())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start dashboard");
                ui.label(&self.message);
            });
        });
    }
}
