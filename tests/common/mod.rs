// tests/common/mod.rs
//
// Recording fake transport + canned NEIS bodies shared by the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use neis_lookup::core::Transport;
use neis_lookup::{Config, NeisClient, QueryError};
use serde_json::{json, Map, Value};

#[derive(Clone, Debug)]
pub struct Call {
    pub url: String,
    pub params: Vec<(&'static str, String)>,
}

#[derive(Default)]
struct Inner {
    calls: Vec<Call>,
    replies: VecDeque<Result<String, QueryError>>,
}

/// Clones share the same call log and reply queue.
#[derive(Clone, Default)]
pub struct FakeTransport {
    inner: Rc<RefCell<Inner>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, body: impl Into<String>) -> &Self {
        self.inner.borrow_mut().replies.push_back(Ok(body.into()));
        self
    }

    pub fn fail(&self, err: QueryError) -> &Self {
        self.inner.borrow_mut().replies.push_back(Err(err));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.borrow().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.borrow().calls.len()
    }

    pub fn last_params(&self) -> Vec<(&'static str, String)> {
        self.inner
            .borrow()
            .calls
            .last()
            .map(|c| c.params.clone())
            .unwrap_or_default()
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str, params: &[(&'static str, String)]) -> Result<String, QueryError> {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(Call { url: url.to_string(), params: params.to_vec() });
        inner
            .replies
            .pop_front()
            .unwrap_or_else(|| Err(QueryError::Transport("no reply queued".into())))
    }
}

pub const TEST_KEY: &str = "test-key";

pub fn config() -> Config {
    Config::default().with_api_key(TEST_KEY)
}

pub fn client(fake: &FakeTransport) -> NeisClient<FakeTransport> {
    NeisClient::with_transport(&config(), fake.clone()).expect("key is set")
}

pub fn param<'a>(params: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
    params.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
}

pub fn count(params: &[(&'static str, String)], name: &str) -> usize {
    params.iter().filter(|(k, _)| *k == name).count()
}

pub const NO_DATA: &str =
    r#"{"RESULT":{"CODE":"INFO-200","MESSAGE":"해당하는 데이터가 없습니다."}}"#;

fn wrap(service: &str, total: usize, rows: Vec<Value>) -> String {
    let sections = json!([
        { "head": [
            { "list_total_count": total },
            { "RESULT": { "CODE": "INFO-000", "MESSAGE": "정상 처리되었습니다." } }
        ]},
        { "row": rows }
    ]);
    let mut top = Map::new();
    top.insert(service.to_string(), sections);
    Value::Object(top).to_string()
}

/// `(office, school, name)` triples → schoolInfo body.
pub fn school_body(rows: &[(&str, &str, &str)]) -> String {
    school_body_with_total(rows, rows.len())
}

pub fn school_body_with_total(rows: &[(&str, &str, &str)], total: usize) -> String {
    let rows: Vec<Value> = rows
        .iter()
        .map(|(office, school, name)| {
            json!({
                "ATPT_OFCDC_SC_CODE": office,
                "ATPT_OFCDC_SC_NM": "서울특별시교육청",
                "SD_SCHUL_CODE": school,
                "SCHUL_NM": name,
                "ENG_SCHUL_NM": null,
                "SCHUL_KND_SC_NM": "고등학교",
                "LCTN_SC_NM": "서울특별시",
                "ORG_RDNMA": "서울특별시 강서구 허준로 123",
                "LOAD_DTM": "20240301"
            })
        })
        .collect();
    wrap("schoolInfo", total, rows)
}

/// `(date, meal name, menu)` triples → mealServiceDietInfo body.
pub fn meal_body(rows: &[(&str, &str, &str)]) -> String {
    let rows: Vec<Value> = rows
        .iter()
        .map(|(date, meal, menu)| {
            json!({
                "ATPT_OFCDC_SC_CODE": "B10",
                "SD_SCHUL_CODE": "7010536",
                "SCHUL_NM": "한가람고등학교",
                "MMEAL_SC_NM": meal,
                "MLSV_YMD": date,
                "DDISH_NM": menu,
                "CAL_INFO": "812.5 Kcal"
            })
        })
        .collect();
    let total = rows.len();
    wrap("mealServiceDietInfo", total, rows)
}
