// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::{app::App, status::Status}, tsv};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(txt) = clipboard_text(app) else {
        app.status = Status::info("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    ui_ctx.copy_text(txt);
    app.status = Status::success("Copied to clipboard");
}

/// Current school table as TSV/CSV, headers included.
pub fn clipboard_text(app: &App) -> Option<String> {
    let table = &app.school_table;
    if table.is_empty() {
        return None;
    }
    logf!(
        "Copy: rows={}, headers={}, format={:?}",
        table.nrows(),
        table.ncols(),
        app.gui.copy_format
    );
    Some(tsv::to_clipboard_string(&table.headers, &table.rows, app.gui.copy_format.sep()))
}
