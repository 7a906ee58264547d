// src/gui/components/status_bar.rs
use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.horizontal(|ui| {
        let color = app.status.color(ui.visuals());
        ui.colored_label(color, &app.status.text);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.hyperlink_to("Data: NEIS Open Education Information Portal", "https://open.neis.go.kr");
        });
    });
}

/// Shown above the tabs while the API key is missing.
pub fn draw_config_banner(ui: &mut egui::Ui, app: &App) {
    if let Err(e) = &app.client {
        let color = ui.visuals().error_fg_color;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.colored_label(color, egui::RichText::new(e.to_string()).strong());
            ui.label("Searches are disabled until the key is configured and the app is restarted.");
        });
    }
}
