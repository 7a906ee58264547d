// src/gui/actions/search_meals.rs
use crate::gui::{app::App, status::Status};

pub fn search_meals(app: &mut App) {
    // Codes come from the stored search only.
    let Some(key) = app.session.meal_key(Some(app.gui.meal_date)) else {
        app.status = Status::info("Search for schools first, then pick one.");
        return;
    };

    let client = match app.client.as_ref() {
        Ok(c) => c,
        Err(e) => {
            let msg = e.to_string();
            loge!("Search: meals blocked: {}", msg);
            app.status = Status::error(msg);
            return;
        }
    };

    let result = client.lookup_meals(&key);

    match result {
        Ok(meals) if meals.is_empty() => {
            app.meals.clear();
            app.status = Status::info("No meal information for that date.");
        }
        Ok(meals) => {
            app.status = Status::success(format!("Found {} meal(s) for {}", meals.len(), key.date_param()));
            app.meals = meals;
        }
        Err(e) => {
            app.meals.clear();
            app.status = Status::error(format!("Could not fetch meals: {e}"));
        }
    }
}
