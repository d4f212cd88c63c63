//! Grouping & ordering — arranges diff results into the deterministic
//! feature set → benchmark → metric presentation tree.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use benchdelta_core::config::CompareConfig;
use benchdelta_core::types::{ClassificationCounts, DiffResult};

use crate::gate::Verdict;

/// Metric rows for one benchmark, in metric-priority order. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSection {
    pub name: String,
    pub rows: Vec<DiffResult>,
}

impl BenchmarkSection {
    /// The primary-metric row shown in the feature set's benchmark table.
    pub fn primary(&self) -> &DiffResult {
        &self.rows[0]
    }
}

/// Benchmarks for one feature set, lexicographic, with a classification
/// roll-up across every metric row in the section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSetSection {
    pub name: String,
    pub counts: ClassificationCounts,
    pub benchmarks: Vec<BenchmarkSection>,
}

/// The ordered presentation tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTree {
    pub feature_sets: Vec<FeatureSetSection>,
}

/// The immutable rendering artifact: ordered tree, totals, verdict, and
/// the threshold the classification used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub tree: ReportTree,
    pub totals: ClassificationCounts,
    pub verdict: Verdict,
    pub threshold_pct: f64,
}

/// Build the presentation tree.
///
/// Feature sets follow the caller-declared order, with undeclared names
/// appended alphabetically. Benchmarks sort lexicographically. Metrics
/// follow the declared priority, undeclared metrics after, alphabetically.
/// The output is a pure function of the diff set and configuration.
pub fn build_tree(diffs: &[DiffResult], config: &CompareConfig) -> ReportTree {
    let mut by_feature: BTreeMap<String, BTreeMap<String, Vec<DiffResult>>> = BTreeMap::new();
    for diff in diffs {
        by_feature
            .entry(diff.key.feature_set.clone())
            .or_default()
            .entry(diff.key.benchmark.clone())
            .or_default()
            .push(diff.clone());
    }

    let mut ordered_names: Vec<String> = config
        .feature_sets
        .iter()
        .map(|decl| decl.name.clone())
        .filter(|name| by_feature.contains_key(name))
        .collect();
    // BTreeMap keys iterate sorted, so undeclared names append alphabetically.
    let undeclared: Vec<String> = by_feature
        .keys()
        .filter(|name| !ordered_names.contains(*name))
        .cloned()
        .collect();
    ordered_names.extend(undeclared);

    let priority = config.effective_metric_priority();
    let mut feature_sets = Vec::with_capacity(ordered_names.len());
    for name in ordered_names {
        let Some(benches) = by_feature.remove(&name) else {
            continue;
        };
        let mut counts = ClassificationCounts::default();
        let mut benchmarks = Vec::with_capacity(benches.len());
        for (bench_name, mut rows) in benches {
            rows.sort_by(|a, b| {
                metric_rank(&a.key.metric, &priority).cmp(&metric_rank(&b.key.metric, &priority))
            });
            for row in &rows {
                counts.record(row.classification);
            }
            benchmarks.push(BenchmarkSection {
                name: bench_name,
                rows,
            });
        }
        feature_sets.push(FeatureSetSection {
            name,
            counts,
            benchmarks,
        });
    }

    ReportTree { feature_sets }
}

/// Sort key for a metric: its declared priority slot, or past the declared
/// slots with the name itself as the alphabetical tiebreaker.
fn metric_rank<'a>(metric: &'a str, priority: &[String]) -> (usize, &'a str) {
    match priority.iter().position(|p| p == metric) {
        Some(pos) => (pos, ""),
        None => (priority.len(), metric),
    }
}
