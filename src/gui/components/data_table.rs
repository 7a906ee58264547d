// src/gui/components/data_table.rs
//
// Draws a result table. Purely a view: returns the clicked row (if any)
// and leaves selection handling to the caller.

use eframe::egui::{self, Align, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::table_model::TableData;

pub fn draw(
    ui: &mut egui::Ui,
    id: &str,
    table: &TableData,
    selected: Option<usize>,
    column_width: f32,
) -> Option<usize> {
    let cols = table.ncols();
    if cols == 0 {
        return None;
    }

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let mut clicked = None;
    let avail_h = ui.available_height();

    egui::ScrollArea::horizontal()
        .id_salt((id, "hscroll"))
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .id_salt(id)
                .striped(true)
                .sense(Sense::click())
                .min_scrolled_height(0.0)
                .max_scroll_height(avail_h);
            for _ in 0..cols {
                builder = builder.column(
                    Column::initial(column_width).resizable(true).clip(true).at_least(20.0),
                );
            }

            builder
                .header(24.0, |mut header| {
                    for ci in 0..cols {
                        let label = table
                            .headers
                            .as_ref()
                            .and_then(|h| h.get(ci).cloned())
                            .unwrap_or_else(|| format!("Col {}", ci + 1));
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.add(egui::Label::new(RichText::new(label).strong()).selectable(false));
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, table.nrows(), |mut row| {
                        let ix = row.index();
                        row.set_selected(selected == Some(ix));
                        if let Some(data) = table.rows.get(ix) {
                            for ci in 0..cols {
                                let cell = data.get(ci).map(String::as_str).unwrap_or("");
                                row.col(|ui| {
                                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                        ui.add(egui::Label::new(cell).selectable(false));
                                    });
                                });
                            }
                        }
                        if row.response().clicked() {
                            clicked = Some(ix);
                        }
                    });
                });
        });

    clicked
}
