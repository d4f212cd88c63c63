//! Diff engine — exact delta math and the six-way classification.
//!
//! Lower is better for every metric handled here. No rounding happens
//! before classification; rendering rounds for display only.

use benchdelta_core::config::CompareConfig;
use benchdelta_core::types::{Classification, DiffResult, MatchedPair, Reading};

/// Classify every matched pair. One `DiffResult` per pair, same order.
pub fn compute_diffs(pairs: &[MatchedPair], config: &CompareConfig) -> Vec<DiffResult> {
    pairs
        .iter()
        .map(|pair| {
            classify_pair(
                pair,
                config.regression_threshold_pct,
                config.noise_tolerance_pct,
            )
        })
        .collect()
}

/// Classify one matched pair.
///
/// - either side unparseable → `unparseable`
/// - head only → `new`; base only → `removed`
/// - base == 0, head > 0 → `new`, never divided
/// - base > 0: `regression` iff delta_pct strictly exceeds the threshold;
///   `improvement` iff delta_pct is strictly below the negated tolerance;
///   everything else (including the exact boundaries) → `unchanged`
pub fn classify_pair(pair: &MatchedPair, threshold_pct: f64, tolerance_pct: f64) -> DiffResult {
    let mut result = DiffResult {
        key: pair.key.clone(),
        base: pair.base.as_ref().and_then(Reading::value),
        head: pair.head.as_ref().and_then(Reading::value),
        delta: None,
        delta_pct: None,
        classification: Classification::Unparseable,
    };

    if matches!(pair.base, Some(Reading::Unparseable))
        || matches!(pair.head, Some(Reading::Unparseable))
    {
        return result;
    }

    result.classification = match (result.base, result.head) {
        (None, Some(_)) => Classification::New,
        (Some(_), None) => Classification::Removed,
        (Some(base), Some(head)) => {
            result.delta = Some(head - base);
            if base == 0.0 {
                if head > 0.0 {
                    Classification::New
                } else {
                    Classification::Unchanged
                }
            } else {
                let delta_pct = (head - base) / base * 100.0;
                result.delta_pct = Some(delta_pct);
                if delta_pct > threshold_pct {
                    Classification::Regression
                } else if delta_pct < -tolerance_pct {
                    Classification::Improvement
                } else {
                    Classification::Unchanged
                }
            }
        }
        // Matched pairs carry at least one side; an empty pair has nothing
        // to classify and surfaces as unparseable.
        (None, None) => Classification::Unparseable,
    };

    result
}
