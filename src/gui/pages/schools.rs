// src/gui/pages/schools.rs
use eframe::egui;

use crate::{
    config::options::{CopyFormat, PageKind::{ self, * }, SchoolKind},
    gui::{actions, app::App, components::data_table},
    records,
};

use super::Page;

pub struct SchoolsPage;
pub static PAGE: SchoolsPage = SchoolsPage;

const LEADING: &[&str] = &[
    records::SCHOOL_NAME,
    records::SCHOOL_KIND,
    records::REGION,
    records::OFFICE_CODE,
    records::SCHOOL_CODE,
    records::ROAD_ADDRESS,
];

impl Page for SchoolsPage {
    fn kind(&self) -> PageKind { Schools }
    fn title(&self) -> &'static str { "School search" }

    fn leading_columns(&self) -> &'static [&'static str] { LEADING }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let mut search = false;
        let mut copy = false;

        egui::Grid::new("school_filters")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                let form = &mut app.gui.school_form;

                ui.label("School name");
                let r = ui.add(egui::TextEdit::singleline(&mut form.name).hint_text("e.g. 한가람고등학교"));
                search |= r.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                ui.end_row();

                ui.label("School type");
                let selected = form.kind.map(SchoolKind::label).unwrap_or("Any");
                egui::ComboBox::from_id_salt("school_kind")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut form.kind, None, "Any");
                        for kind in SchoolKind::ALL {
                            ui.selectable_value(&mut form.kind, Some(kind), kind.label());
                        }
                    });
                ui.end_row();

                ui.label("Region");
                let r = ui.add(egui::TextEdit::singleline(&mut form.region).hint_text("e.g. 서울특별시"));
                search |= r.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                ui.end_row();
            });

        ui.horizontal(|ui| {
            search |= ui.button("Search schools").clicked();

            ui.separator();

            let fmt = &mut app.gui.copy_format;
            ui.selectable_value(fmt, CopyFormat::Tsv, "TSV");
            ui.selectable_value(fmt, CopyFormat::Csv, "CSV");
            copy = ui
                .add_enabled(!app.school_table.is_empty(), egui::Button::new("Copy"))
                .clicked();
        });

        if search {
            actions::search_schools(app);
        }
        if copy {
            actions::copy(app, ui.ctx());
        }

        ui.separator();

        if app.school_table.is_empty() {
            return;
        }

        let clicked = data_table::draw(
            ui,
            "schools_table",
            &app.school_table,
            app.session.selected_index(),
            self.preferred_column_width(),
        );
        if let Some(ix) = clicked {
            actions::select_school(app, ix);
        }
    }
}
