// src/specs/meals.rs
//
// Meal service diet (`hub/mealServiceDietInfo`) for one school and one day.

use crate::config::consts::MEAL_INFO_SERVICE;
use crate::core::Params;
use crate::error::QueryError;
use crate::records::{MealRecord, OFFICE_CODE, SCHOOL_CODE};
use crate::session::MealQueryKey;

use super::{base_params, envelope, Fetched};

pub const PARAM_OFFICE: &str = OFFICE_CODE;
pub const PARAM_SCHOOL: &str = SCHOOL_CODE;
pub const PARAM_DATE: &str = "MLSV_YMD";

pub fn build_params(api_key: &str, key: &MealQueryKey) -> Params {
    let mut params = base_params(api_key);
    params.push((PARAM_OFFICE, s!(key.office_code())));
    params.push((PARAM_SCHOOL, s!(key.school_code())));
    params.push((PARAM_DATE, key.date_param()));
    params
}

pub fn parse(body: &str) -> Result<Fetched<MealRecord>, QueryError> {
    let raw = envelope::unwrap_rows(body, MEAL_INFO_SERVICE)?;
    let records = raw
        .records
        .into_iter()
        .map(MealRecord::try_from_record)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Fetched { records, total: raw.total })
}
