// src/config/consts.rs

/* ---------- upstream endpoints ---------- */
pub const SCHOOL_INFO_URL: &str = "https://open.neis.go.kr/hub/schoolInfo";
pub const MEAL_INFO_URL: &str = "https://open.neis.go.kr/hub/mealServiceDietInfo";

/// Top-level JSON key wrapping each endpoint's result sections.
pub const SCHOOL_INFO_SERVICE: &str = "schoolInfo";
pub const MEAL_INFO_SERVICE: &str = "mealServiceDietInfo";

pub const RESPONSE_TYPE: &str = "json";

// Only the first page is ever requested; anything past PAGE_SIZE is dropped.
pub const PAGE_INDEX: u32 = 1;
pub const PAGE_SIZE: u32 = 100;

/// Line-break marker inside DDISH_NM.
pub const BREAK_MARKER: &str = "<br/>";

/// Wire format of MLSV_YMD.
pub const DATE_FORMAT: &str = "%Y%m%d";

/* ---------- environment ---------- */
pub const API_KEY_VAR: &str = "NEIS_API_KEY";
pub const SCHOOL_URL_VAR: &str = "NEIS_SCHOOL_INFO_URL";
pub const MEAL_URL_VAR: &str = "NEIS_MEAL_INFO_URL";

/* ---------- local files ---------- */
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

/* ---------- window ---------- */
pub const WINDOW_TITLE: &str = "NEIS School & Meal Lookup";
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 700.0;
