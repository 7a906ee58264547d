// src/session.rs
//
// Session state bridging the two tabs.
//
// - Holds the most recent *successful* school search and the picked row.
// - A failed search leaves everything as it was.
// - Meal keys are only ever built from the currently stored rows, so a new
//   search can never be paired with codes from an older one.

use chrono::{Local, NaiveDate};

use crate::config::consts::DATE_FORMAT;
use crate::error::QueryError;
use crate::records::SchoolRecord;
use crate::specs::Fetched;

/// Today in local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// What a meal lookup needs: the school's two codes and a day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MealQueryKey {
    office_code: String,
    school_code: String,
    date: NaiveDate,
}

impl MealQueryKey {
    /// `date` falls back to today when not given.
    pub fn new(office_code: impl Into<String>, school_code: impl Into<String>, date: Option<NaiveDate>) -> Self {
        Self {
            office_code: office_code.into(),
            school_code: school_code.into(),
            date: date.unwrap_or_else(today),
        }
    }

    pub fn for_school(school: &SchoolRecord, date: Option<NaiveDate>) -> Self {
        Self::new(school.office_code(), school.school_code(), date)
    }

    pub fn office_code(&self) -> &str { &self.office_code }
    pub fn school_code(&self) -> &str { &self.school_code }
    pub fn date(&self) -> NaiveDate { self.date }

    /// `YYYYMMDD`
    pub fn date_param(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Result of feeding a school search into the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Found { shown: usize, total: Option<u64> },
    Empty,
    Failed(QueryError),
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    schools: Option<Vec<SchoolRecord>>,
    total: Option<u64>,
    selected: Option<usize>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a school search. Success (even empty) replaces the stored rows
    /// and resets the pick to the first row; failure changes nothing.
    pub fn apply_school_result(
        &mut self,
        result: Result<Fetched<SchoolRecord>, QueryError>,
    ) -> SearchOutcome {
        match result {
            Ok(page) => {
                let shown = page.records.len();
                self.selected = if shown > 0 { Some(0) } else { None };
                self.total = page.total;
                self.schools = Some(page.records);
                logf!("Session: stored {} school(s), total={:?}", shown, self.total);

                if shown == 0 {
                    SearchOutcome::Empty
                } else {
                    SearchOutcome::Found { shown, total: self.total }
                }
            }
            Err(e) => {
                logd!("Session: search failed, keeping previous result ({})", e);
                SearchOutcome::Failed(e)
            }
        }
    }

    pub fn schools(&self) -> &[SchoolRecord] {
        self.schools.as_deref().unwrap_or(&[])
    }

    /// Meal tab is only usable when this is true.
    pub fn has_schools(&self) -> bool {
        !self.schools().is_empty()
    }

    /// Whether any search has succeeded this session.
    pub fn has_searched(&self) -> bool {
        self.schools.is_some()
    }

    pub fn total_available(&self) -> Option<u64> {
        self.total
    }

    /// Pick a stored row. Out-of-range picks are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.schools().len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_school(&self) -> Option<&SchoolRecord> {
        self.selected.and_then(|ix| self.schools().get(ix))
    }

    /// Key for the picked school, or `None` when nothing is picked.
    pub fn meal_key(&self, date: Option<NaiveDate>) -> Option<MealQueryKey> {
        self.selected_school().map(|s| MealQueryKey::for_school(s, date))
    }

    /// End of session.
    pub fn clear(&mut self) {
        self.schools = None;
        self.total = None;
        self.selected = None;
    }
}
