//! JSON reporter — the machine-readable mirror of the report.
//!
//! Downstream automation consumes this instead of scraping markdown.

use serde_json::json;

use benchdelta_core::constants::REPORT_MARKER;

use crate::grouping::Report;

use super::Reporter;

/// JSON reporter for machine-readable output.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &Report) -> Result<String, String> {
        let feature_sets: Vec<serde_json::Value> = report
            .tree
            .feature_sets
            .iter()
            .map(|section| {
                json!({
                    "name": section.name,
                    "counts": section.counts,
                    "benchmarks": section.benchmarks.iter().map(|bench| {
                        json!({
                            "name": bench.name,
                            "rows": bench.rows,
                        })
                    }).collect::<Vec<_>>(),
                })
            })
            .collect();

        let output = json!({
            "marker": REPORT_MARKER,
            "threshold_pct": report.threshold_pct,
            "verdict": report.verdict,
            "has_regressions": report.totals.regressions > 0,
            "totals": report.totals,
            "feature_sets": feature_sets,
        });

        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
    }
}
