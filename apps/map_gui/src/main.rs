use std::sync::Arc;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::anyhow;
use backend_bridge::commands::BackendCommand;
use client_core::ClientSettings;
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;
use ui::MapGuiApp;

fn main() -> anyhow::Result<()> {
    let settings = ClientSettings::load(None)?;
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();

    let workflow = client_core::connect(&settings)?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(Arc::clone(&workflow), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Coordinate Map")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Coordinate Map",
        options,
        Box::new(move |_cc| Ok(Box::new(MapGuiApp::new(workflow, cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow!("failed to run map window: {err}"))
}
