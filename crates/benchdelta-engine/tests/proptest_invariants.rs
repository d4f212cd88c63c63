//! Property-based tests for diff math and report determinism.
//!
//! Uses proptest to fuzz-verify:
//!   - the exact delta_pct formula for positive bases
//!   - classification band membership against the configured thresholds
//!   - order-insensitivity of the rendered report

use proptest::prelude::*;

use benchdelta_core::config::CompareConfig;
use benchdelta_core::types::{Classification, MatchedPair, Reading, Revision, SampleKey};
use benchdelta_engine::diff::classify_pair;
use benchdelta_engine::reporters::{MarkdownReporter, Reporter};
use benchdelta_engine::{run_compare, MeasurementPayload};

fn value_pair(base: f64, head: f64) -> MatchedPair {
    MatchedPair {
        key: SampleKey::new("default", "parse", "Ir"),
        base: Some(Reading::Value(base)),
        head: Some(Reading::Value(head)),
    }
}

fn payload(feature_set: &str, revision: Revision, raw: String) -> MeasurementPayload {
    MeasurementPayload {
        feature_set: feature_set.to_string(),
        revision,
        raw,
    }
}

proptest! {
    /// delta and delta_pct follow the exact formulas whenever base > 0.
    #[test]
    fn prop_delta_pct_formula(base in 1.0f64..1e9, head in 0.0f64..1e9) {
        let result = classify_pair(&value_pair(base, head), 3.0, 0.0);
        prop_assert_eq!(result.base, Some(base));
        prop_assert_eq!(result.head, Some(head));
        prop_assert_eq!(result.delta, Some(head - base));
        prop_assert_eq!(result.delta_pct, Some((head - base) / base * 100.0));
    }

    /// Classification is exactly the band the delta falls into: strictly
    /// above the threshold, strictly below the negated tolerance, or the
    /// inclusive middle.
    #[test]
    fn prop_classification_bands(
        base in 1.0f64..1e9,
        head in 0.0f64..1e9,
        threshold in 0.0f64..50.0,
        tolerance in 0.0f64..50.0,
    ) {
        let result = classify_pair(&value_pair(base, head), threshold, tolerance);
        let pct = (head - base) / base * 100.0;
        let expected = if pct > threshold {
            Classification::Regression
        } else if pct < -tolerance {
            Classification::Improvement
        } else {
            Classification::Unchanged
        };
        prop_assert_eq!(result.classification, expected);
    }

    /// Rendering is a pure function of the sample SET: delivering the same
    /// records in reverse order, with the payloads themselves swapped,
    /// produces byte-identical markdown.
    #[test]
    fn prop_report_order_insensitive(
        values in prop::collection::btree_map((0usize..6, 0usize..4), 0u64..2_000_000, 1..20),
        head_bump in 0u64..100_000,
    ) {
        let base_records: Vec<String> = values
            .iter()
            .map(|((b, m), v)| {
                format!(r#"{{"benchmark": "bench_{b}", "metric": "m{m}", "value": {v}}}"#)
            })
            .collect();
        let head_records: Vec<String> = values
            .iter()
            .map(|((b, m), v)| {
                format!(
                    r#"{{"benchmark": "bench_{b}", "metric": "m{m}", "value": {}}}"#,
                    v + head_bump
                )
            })
            .collect();

        let base_forward = format!("[{}]", base_records.join(","));
        let mut reversed = base_records.clone();
        reversed.reverse();
        let base_backward = format!("[{}]", reversed.join(","));
        let head = format!("[{}]", head_records.join(","));

        let config = CompareConfig::default();
        let a = run_compare(
            &[
                payload("default", Revision::Base, base_forward),
                payload("default", Revision::Head, head.clone()),
            ],
            &config,
        )
        .unwrap();
        let b = run_compare(
            &[
                payload("default", Revision::Head, head),
                payload("default", Revision::Base, base_backward),
            ],
            &config,
        )
        .unwrap();

        let first = MarkdownReporter.generate(&a.report).unwrap();
        let second = MarkdownReporter.generate(&b.report).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(a.diffs, b.diffs);
    }
}
