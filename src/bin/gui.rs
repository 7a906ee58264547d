// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use color_eyre::eyre::{eyre, Result};
use eframe::egui::{IconData, ViewportBuilder};
use neis_lookup::config::consts::{WINDOW_H, WINDOW_W};
use neis_lookup::gui;

fn app_icon() -> Result<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/neis_lookup.png"
    )))?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([WINDOW_W, WINDOW_H])
            .with_icon(app_icon()?),
        ..Default::default()
    };

    gui::run(options).map_err(|e| eyre!("GUI failed: {e}"))
}
