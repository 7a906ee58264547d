// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::options::PageKind;
use super::app::App;

pub mod meals;
pub mod schools;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Columns shown first in this page's table, if it has one.
    fn leading_columns(&self) -> &'static [&'static str] {
        &[]
    }

    /// Optional: per-page column widths (in px-ish)
    fn preferred_column_width(&self) -> f32 {
        120.0
    }

    /// Draw the page body below the tabs.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);

    /// Called when the tab becomes active.
    fn on_enter(&self, _app: &mut App) {}
}
