//! Markdown reporter — the sticky PR-comment report.
//!
//! The first line is the fixed marker token, so an external publisher can
//! locate a prior comment and overwrite it instead of posting a duplicate.

use benchdelta_core::constants::REPORT_MARKER;
use benchdelta_core::types::{Classification, DiffResult};

use crate::grouping::{FeatureSetSection, Report};

use super::Reporter;

/// Markdown reporter for the sticky benchmark comparison comment.
pub struct MarkdownReporter;

impl Reporter for MarkdownReporter {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn generate(&self, report: &Report) -> Result<String, String> {
        let mut lines: Vec<String> = Vec::new();

        lines.push(REPORT_MARKER.to_string());
        lines.push("## Benchmark Comparison Report".to_string());
        lines.push(String::new());
        lines.push(format!(
            "Regression threshold: **{:.2}%**",
            report.threshold_pct
        ));
        lines.push(String::new());
        lines.push(verdict_line(report));
        lines.push(totals_line(report));
        lines.push(String::new());

        // Per-feature-set roll-up.
        lines.push(
            "| Feature Set | Regressions | Improvements | Unchanged | New | Removed | Unparseable |"
                .to_string(),
        );
        lines.push("| --- | ---: | ---: | ---: | ---: | ---: | ---: |".to_string());
        for section in &report.tree.feature_sets {
            lines.push(format!(
                "| {} | {} | {} | {} | {} | {} | {} |",
                section.name,
                section.counts.regressions,
                section.counts.improvements,
                section.counts.unchanged,
                section.counts.new,
                section.counts.removed,
                section.counts.unparseable,
            ));
        }
        lines.push(String::new());

        for section in &report.tree.feature_sets {
            render_feature_set(&mut lines, section);
        }

        render_regression_list(&mut lines, report);

        Ok(lines.join("\n"))
    }
}

fn verdict_line(report: &Report) -> String {
    if report.totals.regressions > 0 {
        format!(
            "**Verdict:** 🔴 {} regression(s) above threshold",
            report.totals.regressions
        )
    } else {
        "**Verdict:** 🟢 no regressions above threshold".to_string()
    }
}

fn totals_line(report: &Report) -> String {
    let t = &report.totals;
    format!(
        "{} regressions, {} improvements, {} unchanged, {} new, {} removed, {} unparseable",
        t.regressions, t.improvements, t.unchanged, t.new, t.removed, t.unparseable
    )
}

fn render_feature_set(lines: &mut Vec<String>, section: &FeatureSetSection) {
    lines.push(format!(
        "<details><summary><strong>{}</strong></summary>",
        section.name
    ));
    lines.push(String::new());
    lines.push("| Benchmark | Base | Head | Delta | Status |".to_string());
    lines.push("| --- | ---: | ---: | ---: | --- |".to_string());
    for bench in &section.benchmarks {
        let primary = bench.primary();
        lines.push(format!(
            "| {} | {} | {} | {} | {} |",
            bench.name,
            fmt_value(primary.base),
            fmt_value(primary.head),
            fmt_delta(primary),
            status_label(primary.classification),
        ));
    }
    lines.push(String::new());
    lines.push("Metric-level breakdowns:".to_string());
    lines.push(String::new());

    for bench in &section.benchmarks {
        lines.push(format!(
            "<details><summary>{} metric breakdown ({} metrics)</summary>",
            bench.name,
            bench.rows.len()
        ));
        lines.push(String::new());
        lines.push("| Metric | Base | Head | Delta | Status |".to_string());
        lines.push("| --- | ---: | ---: | ---: | --- |".to_string());
        for row in &bench.rows {
            lines.push(format!(
                "| {} | {} | {} | {} | {} |",
                row.key.metric,
                fmt_value(row.base),
                fmt_value(row.head),
                fmt_delta(row),
                status_label(row.classification),
            ));
        }
        lines.push(String::new());
        lines.push("</details>".to_string());
        lines.push(String::new());
    }

    lines.push("</details>".to_string());
    lines.push(String::new());
}

fn render_regression_list(lines: &mut Vec<String>, report: &Report) {
    let mut regressions: Vec<&DiffResult> = report
        .tree
        .feature_sets
        .iter()
        .flat_map(|s| s.benchmarks.iter())
        .flat_map(|b| b.rows.iter())
        .filter(|row| row.classification == Classification::Regression)
        .collect();
    if regressions.is_empty() {
        return;
    }

    // Worst first; key order breaks exact ties so output stays stable.
    regressions.sort_by(|a, b| {
        let pa = a.delta_pct.unwrap_or(0.0);
        let pb = b.delta_pct.unwrap_or(0.0);
        pb.partial_cmp(&pa)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.key.cmp(&b.key))
    });

    lines.push("### Regressions Above Threshold".to_string());
    lines.push(String::new());
    for row in regressions {
        lines.push(format!(
            "- `{}` / `{}` / `{}`: {}",
            row.key.feature_set,
            row.key.benchmark,
            row.key.metric,
            fmt_delta(row),
        ));
    }
    lines.push(String::new());
}

fn status_label(classification: Classification) -> &'static str {
    match classification {
        Classification::Regression => "🔴 regression",
        Classification::Improvement => "🟢 improvement",
        Classification::Unchanged => "⚪ unchanged",
        Classification::New => "➕ new",
        Classification::Removed => "➖ removed",
        Classification::Unparseable => "❓ unparseable",
    }
}

/// Render a count with thousands separators; fractional values keep two
/// decimal places. Absent values render as `n/a`.
fn fmt_value(value: Option<f64>) -> String {
    let Some(value) = value else {
        return "n/a".to_string();
    };
    if value.fract() == 0.0 && value.abs() < 9.0e15 {
        group_thousands(value as i64)
    } else {
        format!("{value:.2}")
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn fmt_delta(row: &DiffResult) -> String {
    match row.delta_pct {
        Some(pct) => format!("{pct:+.2}%"),
        None => "n/a".to_string(),
    }
}
