// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use criterion::{Criterion, criterion_group, criterion_main};

use xcreport_parse::{ReportOptions, parse_output};

fn synthetic_log(cases: usize) -> String {
    let mut log = String::from("Test Suite 'BenchSuite' started at 2026-01-12 09:30:10\n");
    for i in 0..cases {
        log.push_str(&format!(
            "Test Case '-[Bench.BenchSuite test{i}]' passed (0.001 seconds).\n"
        ));
        log.push_str("note: some interleaved build output\n");
    }
    log.push_str("/src/main.swift:10:5: warning: unused variable 'x'\n");
    log.push_str("** BUILD SUCCEEDED **\n");
    log
}

fn parse_benchmark(c: &mut Criterion) {
    let log = synthetic_log(500);

    c.bench_function("parse_output_500_cases", |b| {
        b.iter(|| {
            let report = parse_output(std::hint::black_box(&log), ReportOptions::default());
            std::hint::black_box(report)
        })
    });
}

criterion_group!(benches, parse_benchmark);
criterion_main!(benches);
