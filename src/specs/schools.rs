// src/specs/schools.rs
//
// School directory (`hub/schoolInfo`).
// Always page 1 of size PAGE_SIZE; filters are only sent when present.

use crate::config::consts::{PAGE_INDEX, PAGE_SIZE, SCHOOL_INFO_SERVICE};
use crate::config::options::SchoolFilter;
use crate::core::Params;
use crate::error::QueryError;
use crate::records::SchoolRecord;

use super::{base_params, envelope, Fetched};

pub const PARAM_PAGE_INDEX: &str = "pIndex";
pub const PARAM_PAGE_SIZE: &str = "pSize";
pub const PARAM_NAME: &str = "SCHUL_NM";
pub const PARAM_KIND: &str = "SCHUL_KND_SC_NM";
pub const PARAM_REGION: &str = "LCTN_SC_NM";

pub fn build_params(api_key: &str, filter: &SchoolFilter) -> Params {
    let mut params = base_params(api_key);
    params.push((PARAM_PAGE_INDEX, PAGE_INDEX.to_string()));
    params.push((PARAM_PAGE_SIZE, PAGE_SIZE.to_string()));

    if let Some(name) = filter.name() {
        params.push((PARAM_NAME, s!(name)));
    }
    if let Some(kind) = filter.kind() {
        params.push((PARAM_KIND, s!(kind.upstream_value())));
    }
    if let Some(region) = filter.region() {
        params.push((PARAM_REGION, s!(region)));
    }
    params
}

pub fn parse(body: &str) -> Result<Fetched<SchoolRecord>, QueryError> {
    let raw = envelope::unwrap_rows(body, SCHOOL_INFO_SERVICE)?;
    let records = raw
        .records
        .into_iter()
        .map(SchoolRecord::try_from_record)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Fetched { records, total: raw.total })
}
