// tests/gui_actions.rs
//
// Button actions driven without a window.
mod common;

use chrono::NaiveDate;
use common::*;
use neis_lookup::config::options::PageKind;
use neis_lookup::gui::{actions, app::App, router, status::StatusKind};
use neis_lookup::session::today;
use neis_lookup::{ConfigError, QueryError};

fn app_with(fake: &FakeTransport) -> App {
    App::with_client(Ok(client(fake).boxed()))
}

fn three() -> String {
    school_body(&[
        ("B10", "7010001", "일"),
        ("J10", "7530002", "이"),
        ("C10", "7150003", "삼"),
    ])
}

#[test]
fn missing_key_blocks_search_with_message() {
    let mut app = App::with_client(Err(ConfigError::MissingApiKey));
    assert!(app.status.is_error());

    app.gui.school_form.name = "가람".into();
    actions::search_schools(&mut app);
    assert_eq!(app.status.kind, StatusKind::Error);
    assert!(app.status.text.contains("NEIS_API_KEY"));
    assert!(!app.session.has_searched());
}

#[test]
fn no_matches_shows_info() {
    let fake = FakeTransport::new();
    fake.reply(NO_DATA);
    let mut app = app_with(&fake);

    app.gui.school_form.name = "Hangaram Elementary".into();
    actions::search_schools(&mut app);

    assert_eq!(app.status.kind, StatusKind::Info);
    assert_eq!(app.status.text, "No schools match the search.");
    assert!(app.school_table.is_empty());
    assert_eq!(param(&fake.last_params(), "SCHUL_NM"), Some("Hangaram Elementary"));
}

#[test]
fn search_pick_and_look_up_meals() {
    let fake = FakeTransport::new();
    fake.reply(three());
    let mut app = app_with(&fake);

    actions::search_schools(&mut app);
    assert_eq!(app.status.kind, StatusKind::Success);
    assert_eq!(app.status.text, "Found 3 school(s)");
    assert_eq!(app.school_table.nrows(), 3);
    let headers = app.school_table.headers.clone().unwrap();
    assert_eq!(headers[0], "SCHUL_NM");
    assert_eq!(app.school_table.rows[1][0], "이");

    actions::select_school(&mut app, 1);
    app.gui.meal_date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();

    fake.reply(meal_body(&[("20240304", "중식", "Rice<br/>Soup<br/>Kimchi")]));
    actions::search_meals(&mut app);

    let params = fake.last_params();
    assert_eq!(param(&params, "ATPT_OFCDC_SC_CODE"), Some("J10"));
    assert_eq!(param(&params, "SD_SCHUL_CODE"), Some("7530002"));
    assert_eq!(param(&params, "MLSV_YMD"), Some("20240304"));

    assert_eq!(app.meals.len(), 1);
    assert_eq!(app.meals[0].menu_lines(), vec!["Rice", "Soup", "Kimchi"]);
    assert_eq!(app.status.kind, StatusKind::Success);
}

#[test]
fn failed_search_keeps_table_and_selection() {
    let fake = FakeTransport::new();
    fake.reply(three());
    let mut app = app_with(&fake);
    actions::search_schools(&mut app);
    actions::select_school(&mut app, 2);
    let table_before = app.school_table.clone();

    fake.fail(QueryError::Transport("dns error".into()));
    actions::search_schools(&mut app);

    assert_eq!(app.status.kind, StatusKind::Error);
    assert!(app.status.text.starts_with("Could not fetch schools"));
    assert_eq!(app.school_table, table_before);
    assert_eq!(app.session.selected_index(), Some(2));
}

#[test]
fn empty_result_closes_meal_lookup() {
    let fake = FakeTransport::new();
    fake.reply(three());
    fake.reply(NO_DATA);
    let mut app = app_with(&fake);

    actions::search_schools(&mut app);
    actions::search_schools(&mut app);
    assert!(!app.session.has_schools());

    let calls_before = fake.call_count();
    actions::search_meals(&mut app);
    assert_eq!(fake.call_count(), calls_before, "no meal request without a school");
    assert_eq!(app.status.kind, StatusKind::Info);
}

#[test]
fn no_meals_and_meal_errors() {
    let fake = FakeTransport::new();
    fake.reply(three());
    let mut app = app_with(&fake);
    actions::search_schools(&mut app);

    fake.reply(NO_DATA);
    actions::search_meals(&mut app);
    assert_eq!(app.status.text, "No meal information for that date.");
    assert!(app.meals.is_empty());

    fake.fail(QueryError::Status { status: 502 });
    actions::search_meals(&mut app);
    assert_eq!(app.status.kind, StatusKind::Error);
    assert!(app.meals.is_empty());
    // Meal failures never touch the stored schools.
    assert_eq!(app.session.schools().len(), 3);
}

#[test]
fn truncated_search_says_so() {
    let rows: Vec<(String, String)> = (0..100)
        .map(|i| (format!("{:07}", 7_000_000 + i), format!("학교{i}")))
        .collect();
    let triples: Vec<(&str, &str, &str)> = rows
        .iter()
        .map(|(code, name)| ("B10", code.as_str(), name.as_str()))
        .collect();

    let fake = FakeTransport::new();
    fake.reply(school_body_with_total(&triples, 1234));
    let mut app = app_with(&fake);
    actions::search_schools(&mut app);

    assert_eq!(app.school_table.nrows(), 100);
    assert_eq!(app.status.text, "Found 1234 schools; showing the first 100");
}

#[test]
fn short_page_with_larger_total_reports_rows_shown() {
    let fake = FakeTransport::new();
    fake.reply(school_body_with_total(&[("B10", "7010001", "일"), ("J10", "7530002", "이")], 40));
    let mut app = app_with(&fake);
    actions::search_schools(&mut app);

    assert_eq!(app.school_table.nrows(), 2);
    assert_eq!(app.status.text, "Found 40 schools; showing the first 2");
}

#[test]
fn clipboard_text_is_tsv_with_headers() {
    let fake = FakeTransport::new();
    fake.reply(three());
    let mut app = app_with(&fake);
    assert_eq!(actions::clipboard_text(&app), None);

    actions::search_schools(&mut app);
    let txt = actions::clipboard_text(&app).unwrap();
    let lines: Vec<&str> = txt.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("SCHUL_NM\tSCHUL_KND_SC_NM\tLCTN_SC_NM\t"));
    assert!(lines[1].starts_with("일\t고등학교\t서울특별시\tB10\t7010001\t"));
}

#[test]
fn entering_meal_tab_resets_date_to_today() {
    let fake = FakeTransport::new();
    let mut app = app_with(&fake);
    app.gui.meal_date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();

    router::page_for(&PageKind::Meals).on_enter(&mut app);

    assert_eq!(app.gui.meal_date, today());
    assert_eq!(fake.call_count(), 0);
}
