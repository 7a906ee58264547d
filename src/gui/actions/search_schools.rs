// src/gui/actions/search_schools.rs
use crate::{
    gui::{app::App, status::Status},
    session::SearchOutcome,
};

pub fn search_schools(app: &mut App) {
    let filter = app.gui.school_form.to_filter();

    let client = match app.client.as_ref() {
        Ok(c) => c,
        Err(e) => {
            let msg = e.to_string();
            loge!("Search: schools blocked: {}", msg);
            app.status = Status::error(msg);
            return;
        }
    };

    logf!("Search: schools begin");
    let result = client.lookup_schools_page(&filter);

    match app.session.apply_school_result(result) {
        SearchOutcome::Found { shown, total } => {
            app.rebuild_school_table();
            app.meals.clear();

            let msg = match total {
                Some(t) if t > shown as u64 => {
                    format!("Found {t} schools; showing the first {shown}")
                }
                _ => format!("Found {shown} school(s)"),
            };
            app.status = Status::success(msg);
        }
        SearchOutcome::Empty => {
            app.rebuild_school_table();
            app.meals.clear();
            app.status = Status::info("No schools match the search.");
        }
        SearchOutcome::Failed(e) => {
            // Stored result and table stay as they were.
            app.status = Status::error(format!("Could not fetch schools: {e}"));
        }
    }
}

/// Pick a stored school (table click or meal-tab picker).
pub fn select_school(app: &mut App, index: usize) {
    if !app.session.select(index) {
        logd!("UI: Ignored out-of-range school pick {}", index);
        return;
    }
    app.meals.clear();
    if let Some(school) = app.session.selected_school() {
        logf!("UI: Selected school #{} {}", index, school.label());
        app.status = Status::info(format!("Selected {}", school.name()));
    }
}
