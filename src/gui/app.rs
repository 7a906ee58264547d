// src/gui/app.rs
use eframe::egui;

use crate::{
    client::{DynClient, NeisClient},
    config::{consts::WINDOW_TITLE, options::PageKind, state::GuiState, Config},
    dataset::DataSet,
    error::ConfigError,
    records::MealRecord,
    session::Session,
};

use super::{
    components::{instructions, status_bar, tabs},
    pages::Page,
    router,
    status::Status,
    table_model::TableData,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), eframe::Error> {
    let config = Config::load();
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(config)))),
    )
}

pub struct App {
    pub gui: GuiState,

    // created at start, cleared when the window closes
    pub session: Session,

    // Err while the API key is missing; every search checks this first
    pub client: Result<DynClient, ConfigError>,

    // display state derived from the session / last meal lookup
    pub school_table: TableData,
    pub meals: Vec<MealRecord>,

    pub status: Status,
}

impl App {
    pub fn new(config: Config) -> Self {
        logf!("Init: {:?}", config);
        let client = NeisClient::from_config(&config).map(NeisClient::boxed);
        Self::with_client(client)
    }

    pub fn with_client(client: Result<DynClient, ConfigError>) -> Self {
        let status = match &client {
            Ok(_) => Status::idle(),
            Err(e) => {
                loge!("Init: {}", e);
                Status::error(e.to_string())
            }
        };

        Self {
            gui: GuiState::default(),
            session: Session::new(),
            client,
            school_table: TableData::empty(),
            meals: Vec::new(),
            status,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    /// Rebuild the school table from the stored search.
    pub fn rebuild_school_table(&mut self) {
        let ds = DataSet::from_records(self.session.schools());
        let leading = router::page_for(&PageKind::Schools).leading_columns();
        self.school_table = TableData::from_dataset_leading(&ds, leading);
        logd!("View: school table rows={} cols={}", self.school_table.nrows(), self.school_table.ncols());
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status")
            .show(ctx, |ui| {
                status_bar::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(WINDOW_TITLE);
            status_bar::draw_config_banner(ui, self);

            tabs::draw(ui, self);

            ui.separator();

            instructions::draw(ui);

            ui.separator();

            let page = self.current_page();
            page.draw(ui, self);
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.session.clear();
        logf!("Exit: session cleared");
    }
}
