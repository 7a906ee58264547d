// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Each action is one button press: at most one outbound request, run
// synchronously on the UI thread.

mod copy;           // src/gui/actions/copy.rs
mod search_meals;   // src/gui/actions/search_meals.rs
mod search_schools; // src/gui/actions/search_schools.rs

pub use copy::{clipboard_text, copy};
pub use search_meals::search_meals;
pub use search_schools::{search_schools, select_school};
