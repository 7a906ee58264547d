// src/gui/components/instructions.rs
use eframe::egui;

const STEPS: &[&str] = &[
    "In \"School search\", enter any of: school name, school type, region (시/도).",
    "Press \"Search schools\" (or Enter). Up to 100 matches are listed.",
    "Click a row to pick a school, then open the \"Meal search\" tab.",
    "Pick the school and a date, then press \"Look up meals\".",
];

pub fn draw(ui: &mut egui::Ui) {
    egui::CollapsingHeader::new("How to use")
        .id_salt("instructions")
        .default_open(false)
        .show(ui, |ui| {
            for (i, step) in STEPS.iter().enumerate() {
                ui.label(format!("{}. {}", i + 1, step));
            }
        });
}
