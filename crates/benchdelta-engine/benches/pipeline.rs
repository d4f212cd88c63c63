//! Criterion bench for the parse → diff → render hot path.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use benchdelta_core::config::CompareConfig;
use benchdelta_core::types::Revision;
use benchdelta_engine::reporters::{MarkdownReporter, Reporter};
use benchdelta_engine::{run_compare, MeasurementPayload};

fn synthetic_payload(revision: Revision) -> String {
    let bump = match revision {
        Revision::Base => 0,
        Revision::Head => 40_000,
    };
    let mut records = Vec::new();
    for bench in 0..50 {
        for (m, metric) in ["Ir", "Dr", "Dw"].iter().enumerate() {
            records.push(format!(
                r#"{{"benchmark": "bench_{bench}", "metric": "{metric}", "value": {}}}"#,
                1_000_000 + bench * 1_000 + m * 100 + bump
            ));
        }
    }
    format!("[{}]", records.join(","))
}

fn bench_pipeline(c: &mut Criterion) {
    let payloads = vec![
        MeasurementPayload {
            feature_set: "default".to_string(),
            revision: Revision::Base,
            raw: synthetic_payload(Revision::Base),
        },
        MeasurementPayload {
            feature_set: "default".to_string(),
            revision: Revision::Head,
            raw: synthetic_payload(Revision::Head),
        },
    ];
    let config = CompareConfig::default();

    c.bench_function("run_compare_150_metrics", |b| {
        b.iter(|| run_compare(black_box(&payloads), black_box(&config)).unwrap())
    });

    let outcome = run_compare(&payloads, &config).unwrap();
    c.bench_function("render_markdown_150_metrics", |b| {
        b.iter(|| MarkdownReporter.generate(black_box(&outcome.report)).unwrap())
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
