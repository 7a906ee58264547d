use criterion::{criterion_group, criterion_main, Criterion, black_box};
use serde_json::{json, Value};

use neis_lookup::{
    dataset::DataSet,
    specs,
};

/// A full first page (100 rows) shaped like a real schoolInfo response.
fn sample_body() -> String {
    let rows: Vec<Value> = (0..100)
        .map(|i| {
            json!({
                "ATPT_OFCDC_SC_CODE": "B10",
                "ATPT_OFCDC_SC_NM": "서울특별시교육청",
                "SD_SCHUL_CODE": format!("{:07}", 7_010_000 + i),
                "SCHUL_NM": format!("가람{i}초등학교"),
                "ENG_SCHUL_NM": format!("Garam {i} Elementary School"),
                "SCHUL_KND_SC_NM": "초등학교",
                "LCTN_SC_NM": "서울특별시",
                "JU_ORG_NM": "서울특별시강서양천교육지원청",
                "FOND_SC_NM": "공립",
                "ORG_RDNZC": "07700",
                "ORG_RDNMA": "서울특별시 강서구 허준로 123",
                "ORG_TELNO": "02-0000-0000",
                "HMPG_ADRES": "http://example.es.kr",
                "COEDU_SC_NM": "남여공학",
                "FOND_YMD": "19910301",
                "LOAD_DTM": "20240301"
            })
        })
        .collect();

    json!({
        "schoolInfo": [
            { "head": [ { "list_total_count": 100 }, { "RESULT": { "CODE": "INFO-000", "MESSAGE": "ok" } } ] },
            { "row": rows }
        ]
    })
    .to_string()
}

fn bench_rows(c: &mut Criterion) {
    let body = sample_body();

    c.bench_function("schools_parse", |b| {
        b.iter(|| {
            let page = specs::schools::parse(black_box(&body)).map(|p| p.records.len());
            black_box(page.unwrap_or(0))
        })
    });

    let Ok(page) = specs::schools::parse(&body) else { return };

    c.bench_function("schools_dataset", |b| {
        b.iter(|| {
            let ds = DataSet::from_records(black_box(&page.records));
            black_box(ds.row_count())
        })
    });
}

criterion_group!(benches, bench_rows);
criterion_main!(benches);
