// src/specs/envelope.rs
//
// Unwraps the nested collection shared by all NEIS endpoints.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::QueryError;
use crate::records::Record;

use super::Fetched;

#[derive(Debug, Deserialize)]
struct ApiResult {
    #[serde(rename = "CODE")]
    code: String,
    #[serde(rename = "MESSAGE", default)]
    message: String,
}

/// Codes that carry data or an honest "no matches". Everything else,
/// including INFO-300 (key restricted), is a rejection.
const OK_CODES: &[&str] = &["INFO-000", "INFO-200"];

impl ApiResult {
    fn into_error(self) -> Option<QueryError> {
        if OK_CODES.contains(&self.code.as_str()) {
            None
        } else {
            Some(QueryError::Api { code: self.code, message: self.message })
        }
    }
}

/// `RESULT` object → error if it reports a rejection.
fn check_result(v: Option<&Value>) -> Result<(), QueryError> {
    let Some(v) = v else { return Ok(()) };
    let res: ApiResult = serde_json::from_value(v.clone())
        .map_err(|e| QueryError::payload(format!("malformed RESULT: {e}")))?;
    logd!("Envelope: RESULT {} {}", res.code, res.message);
    match res.into_error() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Walk `[{"head": [...]}, ...]` for total count and RESULT.
fn read_head(first: &Value) -> Result<Option<u64>, QueryError> {
    let Some(head) = first.get("head").and_then(Value::as_array) else {
        return Ok(None);
    };
    let mut total = None;
    for entry in head {
        if let Some(n) = entry.get("list_total_count").and_then(Value::as_u64) {
            total = Some(n);
        }
        check_result(entry.get("RESULT"))?;
    }
    Ok(total)
}

fn rows_of(section: &Value) -> Result<Vec<Record>, QueryError> {
    let Some(rows) = section.get("row") else { return Ok(Vec::new()) };
    let rows = rows
        .as_array()
        .ok_or_else(|| QueryError::payload("`row` is not an array"))?;

    rows.iter()
        .map(|r| {
            r.as_object()
                .map(Record::from_json)
                .ok_or_else(|| QueryError::payload("`row` entry is not an object"))
        })
        .collect()
}

/// Parse a response body for `service` into raw rows.
///
/// Missing service key, short section array or missing `row` all mean
/// "no matches" and give an empty result, not an error.
pub fn unwrap_rows(body: &str, service: &str) -> Result<Fetched<Record>, QueryError> {
    let doc: Value = serde_json::from_str(body)
        .map_err(|e| QueryError::payload(format!("invalid JSON: {e}")))?;
    let top: &Map<String, Value> = doc
        .as_object()
        .ok_or_else(|| QueryError::payload("top-level JSON is not an object"))?;

    check_result(top.get("RESULT"))?;

    let Some(sections) = top.get(service) else {
        return Ok(Fetched::empty());
    };
    let sections = sections
        .as_array()
        .ok_or_else(|| QueryError::payload(format!("`{service}` is not an array")))?;

    let total = match sections.first() {
        Some(first) => read_head(first)?,
        None => None,
    };

    let records = match sections.get(1) {
        Some(section) => rows_of(section)?,
        None => Vec::new(),
    };

    Ok(Fetched { records, total })
}
