//! # Endpoint "specs"
//!
//! One module per NEIS endpoint. Each knows two things about its endpoint:
//! how to turn our inputs into query-string parameters, and how to read the
//! rows back out of the JSON body.
//!
//! ## What does **not** live here
//! - Networking (`core::net`) and the key lookup (`config::env`).
//! - Session state and anything the GUI does with the rows.
//!
//! ## Response convention
//! ```text
//! { "<service>": [ { "head": [ {"list_total_count": N}, {"RESULT": {...}} ] },
//!                  { "row":  [ {...}, {...} ] } ] }
//! ```
//! The second element only exists when something matched. When nothing did,
//! the body is just `{"RESULT": {"CODE": "INFO-200", ...}}`. `ERROR-*` codes in
//! either `RESULT` are rejections and become `QueryError::Api`.
pub mod envelope;
pub mod meals;
pub mod schools;

use crate::config::consts::RESPONSE_TYPE;
use crate::core::Params;

pub const PARAM_KEY: &str = "KEY";
pub const PARAM_TYPE: &str = "Type";

/// Parameters every request carries.
pub(crate) fn base_params(api_key: &str) -> Params {
    vec![
        (PARAM_KEY, s!(api_key)),
        (PARAM_TYPE, s!(RESPONSE_TYPE)),
    ]
}

/// Rows of one lookup plus the upstream's idea of how many exist in total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fetched<T> {
    pub records: Vec<T>,
    pub total: Option<u64>,
}

impl<T> Fetched<T> {
    pub fn empty() -> Self {
        Self { records: Vec::new(), total: None }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when the upstream has more rows than the single page we asked for.
    pub fn is_truncated(&self) -> bool {
        self.total.is_some_and(|t| t > self.records.len() as u64)
    }
}
