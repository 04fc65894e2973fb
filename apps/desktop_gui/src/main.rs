use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

mod controller;
mod ui;

use controller::events::ControlEvent;
use ui::app::{DuckPondApp, PersistedPondSettings, SETTINGS_STORAGE_KEY};

#[derive(Parser, Debug)]
struct Args {
    /// Disable the animated pond; only the selector, buttons, and output
    /// area are shown.
    #[arg(long)]
    no_pond: bool,
    /// Tracing filter, e.g. "debug" or "pond_core=debug".
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(args.log_filter.as_str())
        .init();

    let (event_tx, event_rx) = bounded::<ControlEvent>(256);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Duck Pond Simulator")
            .with_inner_size([560.0, 540.0])
            .with_min_inner_size([560.0, 240.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Duck Pond Simulator",
        options,
        Box::new(move |cc| {
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedPondSettings>(&text).ok())
            });
            Ok(Box::new(DuckPondApp::new(
                event_tx,
                event_rx,
                persisted,
                !args.no_pond,
            )))
        }),
    )
}
