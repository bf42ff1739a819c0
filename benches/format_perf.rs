//! Criterion benchmarks for report rendering.

use criterion::{Criterion, criterion_group, criterion_main};
use indexmap::IndexMap;
use std::hint::black_box;
use std::path::PathBuf;
use verdict::format::render_report;
use verdict::{Request, Response, TestCase, TestResult};

fn fixture(assertion_count: usize) -> (TestCase, Response, TestResult) {
    let test = TestCase {
        name: "Checkout.xml".to_string(),
        result_folder: PathBuf::from("results"),
        request: Request {
            endpoint: "http://localhost/checkout".to_string(),
            test_block: "checkout block".to_string(),
        },
    };
    let response = Response {
        body: "OK".repeat(256),
        code: Some(200),
        headers: Some("Content-Type: application/json".to_string()),
        attachments: None,
    };
    let mut assertions = IndexMap::new();
    for i in 0..assertion_count {
        assertions.insert(format!("assertion {i}"), "passed".to_string());
    }
    let result = TestResult {
        passed: true,
        assertions,
    };
    (test, response, result)
}

fn bench_render(c: &mut Criterion) {
    let (test, response, result) = fixture(32);
    c.bench_function("render_report_32_assertions", |b| {
        b.iter(|| render_report(black_box(&test), black_box(&response), black_box(&result)));
    });

    let (test, response, result) = fixture(0);
    c.bench_function("render_report_no_assertions", |b| {
        b.iter(|| render_report(black_box(&test), black_box(&response), black_box(&result)));
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
