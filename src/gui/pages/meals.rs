// src/gui/pages/meals.rs
use eframe::egui;
use egui_extras::DatePickerButton;

use crate::{
    config::options::PageKind::{ self, * },
    gui::{actions, app::App},
    records::SchoolRecord,
    session::today,
};

use super::Page;

pub struct MealsPage;
pub static PAGE: MealsPage = MealsPage;

impl Page for MealsPage {
    fn kind(&self) -> PageKind { Meals }
    fn title(&self) -> &'static str { "Meal search" }

    // "Today" may have rolled over since the app started.
    fn on_enter(&self, app: &mut App) {
        app.gui.meal_date = today();
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        // Reachable only with stored schools; codes always come from there.
        if !app.session.has_schools() {
            ui.label("Search for schools in the \"School search\" tab first.");
            return;
        }

        let labels: Vec<String> = app.session.schools().iter().map(SchoolRecord::label).collect();
        let current = app.session.selected_index().unwrap_or(0);
        let mut pick = current;

        egui::Grid::new("meal_inputs")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("School");
                egui::ComboBox::from_id_salt("meal_school")
                    .width(ui.available_width().min(480.0))
                    .selected_text(labels.get(current).map(String::as_str).unwrap_or(""))
                    .show_ui(ui, |ui| {
                        for (ix, label) in labels.iter().enumerate() {
                            ui.selectable_value(&mut pick, ix, label);
                        }
                    });
                ui.end_row();

                ui.label("Date");
                ui.horizontal(|ui| {
                    ui.add(DatePickerButton::new(&mut app.gui.meal_date).id_salt("meal_date"));
                    if ui.button("Today").clicked() {
                        app.gui.meal_date = today();
                    }
                });
                ui.end_row();
            });

        if pick != current {
            actions::select_school(app, pick);
        }

        if ui.button("Look up meals").clicked() {
            actions::search_meals(app);
        }

        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("meals_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for meal in &app.meals {
                    ui.label(egui::RichText::new(meal.heading()).heading());
                    for line in meal.menu_lines() {
                        ui.label(line);
                    }
                    if let Some(cal) = meal.calories() {
                        ui.weak(cal);
                    }
                    ui.add_space(10.0);
                }
            });
    }
}
