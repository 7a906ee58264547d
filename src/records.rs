// src/records.rs
//
// Upstream rows, kept field-for-field in upstream order.
// `SchoolRecord` and `MealRecord` only add checked accessors on top.

use serde_json::{Map, Value};

use crate::core::sanitize;
use crate::error::QueryError;

/* ---------- upstream field names ---------- */
pub const OFFICE_CODE: &str = "ATPT_OFCDC_SC_CODE";
pub const SCHOOL_CODE: &str = "SD_SCHUL_CODE";
pub const SCHOOL_NAME: &str = "SCHUL_NM";
pub const SCHOOL_KIND: &str = "SCHUL_KND_SC_NM";
pub const REGION: &str = "LCTN_SC_NM";
pub const ROAD_ADDRESS: &str = "ORG_RDNMA";
pub const MEAL_DATE: &str = "MLSV_YMD";
pub const MEAL_NAME: &str = "MMEAL_SC_NM";
pub const MENU: &str = "DDISH_NM";
pub const CALORIES: &str = "CAL_INFO";

/// One upstream row: ordered `(field, text)` pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn from_json(obj: &Map<String, Value>) -> Self {
        let fields = obj
            .iter()
            .map(|(k, v)| (k.clone(), cell_text(v)))
            .collect();
        Self { fields }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    fn require(&self, key: &str, what: &str) -> Result<(), QueryError> {
        match self.get(key) {
            Some(v) if !v.trim().is_empty() => Ok(()),
            _ => Err(QueryError::payload(format!("{what} row without {key}"))),
        }
    }
}

impl AsRef<Record> for Record {
    fn as_ref(&self) -> &Record { self }
}

fn cell_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => s!(),
        other => other.to_string(),
    }
}

/* ---------------- schools ---------------- */

/// A school directory row. Always has a name, office code and school code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchoolRecord(Record);

impl SchoolRecord {
    pub fn try_from_record(rec: Record) -> Result<Self, QueryError> {
        rec.require(SCHOOL_NAME, "school")?;
        rec.require(OFFICE_CODE, "school")?;
        rec.require(SCHOOL_CODE, "school")?;
        Ok(Self(rec))
    }

    pub fn name(&self) -> &str { self.0.get(SCHOOL_NAME).unwrap_or_default() }
    pub fn office_code(&self) -> &str { self.0.get(OFFICE_CODE).unwrap_or_default() }
    pub fn school_code(&self) -> &str { self.0.get(SCHOOL_CODE).unwrap_or_default() }
    pub fn region(&self) -> Option<&str> { self.0.get(REGION) }

    /// Picker label; codes disambiguate schools sharing a name.
    pub fn label(&self) -> String {
        let mut out = s!(self.name());
        if let Some(region) = self.region().filter(|r| !r.is_empty()) {
            out = join!(&out, " · ", region);
        }
        join!(&out, " [", self.office_code(), "/", self.school_code(), "]")
    }

    pub fn record(&self) -> &Record { &self.0 }
}

impl AsRef<Record> for SchoolRecord {
    fn as_ref(&self) -> &Record { &self.0 }
}

/* ---------------- meals ---------------- */

/// A meal-service row. Always has a date and menu text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MealRecord(Record);

impl MealRecord {
    pub fn try_from_record(rec: Record) -> Result<Self, QueryError> {
        rec.require(MEAL_DATE, "meal")?;
        if rec.get(MENU).is_none() {
            return Err(QueryError::payload(format!("meal row without {MENU}")));
        }
        Ok(Self(rec))
    }

    pub fn date(&self) -> &str { self.0.get(MEAL_DATE).unwrap_or_default() }
    pub fn meal_name(&self) -> Option<&str> { self.0.get(MEAL_NAME).filter(|s| !s.is_empty()) }
    pub fn calories(&self) -> Option<&str> { self.0.get(CALORIES).filter(|s| !s.is_empty()) }

    /// Menu as delivered, `<br/>` markers included.
    pub fn menu_raw(&self) -> &str { self.0.get(MENU).unwrap_or_default() }

    /// Menu with markers turned into newlines.
    pub fn menu_text(&self) -> String { sanitize::break_to_newline(self.menu_raw()) }

    pub fn menu_lines(&self) -> Vec<String> { sanitize::menu_lines(self.menu_raw()) }

    pub fn heading(&self) -> String {
        match self.meal_name() {
            Some(meal) => format!("{} {}", self.date(), meal),
            None => format!("{} menu", self.date()),
        }
    }

    pub fn record(&self) -> &Record { &self.0 }
}

impl AsRef<Record> for MealRecord {
    fn as_ref(&self) -> &Record { &self.0 }
}
