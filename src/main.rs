#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe_whiteboard::{WhiteboardApp, WhiteboardConfig};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    // Optional first argument: path to a JSON config file.
    let config = match std::env::args().nth(1) {
        Some(path) => match WhiteboardConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Using default config, {path} could not be loaded: {err}");
                WhiteboardConfig::default()
            }
        },
        None => WhiteboardConfig::default(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Whiteboard")
            .with_inner_size([
                config.surface_width as f32,
                config.surface_height as f32 + 80.0,
            ]),
        ..Default::default()
    };

    eframe::run_native(
        "Whiteboard",
        native_options,
        Box::new(|cc| Ok(Box::new(WhiteboardApp::new(cc, config)))),
    )
}
