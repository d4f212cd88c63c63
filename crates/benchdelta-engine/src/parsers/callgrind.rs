//! Callgrind-style text adapter.
//!
//! Payload shape: one block per benchmark, concatenated by the runner from
//! the callgrind output files a benchmark run produced:
//!
//! ```text
//! # benchmark: parse
//! events: Ir Dr Dw
//! summary: 1234567 23456 12345
//! ```
//!
//! The `events:` line names the metrics; `summary:` carries the values
//! positionally. A missing `events:` line defaults the event list to `Ir`,
//! the primary callgrind event.

use std::collections::HashSet;

use benchdelta_core::errors::ParseError;
use benchdelta_core::types::{MetricSample, Revision};

use super::numeric::parse_count;
use super::traits::MetricParser;

/// Adapter for callgrind-style summary text.
pub struct CallgrindParser;

impl MetricParser for CallgrindParser {
    fn name(&self) -> &'static str {
        "callgrind"
    }

    fn sniff(&self, raw: &str) -> bool {
        raw.lines().any(|line| {
            let line = line.trim();
            line.starts_with("# benchmark:")
                || line.starts_with("events:")
                || line.starts_with("summary:")
        })
    }

    fn parse(
        &self,
        raw: &str,
        feature_set: &str,
        revision: Revision,
    ) -> Result<Vec<MetricSample>, ParseError> {
        let mut samples = Vec::new();
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut benchmark: Option<String> = None;
        let mut events: Vec<String> = Vec::new();

        for line in raw.lines() {
            let line = line.trim();

            if let Some(rest) = line.strip_prefix("# benchmark:") {
                benchmark = Some(normalize_benchmark_name(rest.trim()));
                events.clear();
            } else if line.is_empty() || line.starts_with('#') {
                continue;
            } else if let Some(rest) = line.strip_prefix("events:") {
                events = rest.split_whitespace().map(str::to_string).collect();
            } else if let Some(rest) = line.strip_prefix("summary:") {
                // Summary lines outside a benchmark block carry no identity
                // we could attach a sample to; skip them.
                let Some(bench) = benchmark.clone() else {
                    continue;
                };

                let values: Vec<&str> = rest.split_whitespace().collect();
                let names: Vec<String> = if events.is_empty() {
                    vec!["Ir".to_string()]
                } else {
                    events.clone()
                };

                for (i, metric) in names.iter().enumerate() {
                    if !seen.insert((bench.clone(), metric.clone())) {
                        return Err(ParseError::DuplicateSample {
                            feature_set: feature_set.to_string(),
                            benchmark: bench,
                            metric: metric.clone(),
                            revision,
                        });
                    }
                    let value = values.get(i).and_then(|token| parse_count(token));
                    samples.push(MetricSample {
                        feature_set: feature_set.to_string(),
                        benchmark: bench.clone(),
                        metric: metric.clone(),
                        value,
                        revision,
                    });
                }
            }
            // Anything else is a callgrind header line we don't need.
        }

        if samples.is_empty() {
            return Err(ParseError::UnrecognizedFormat {
                feature_set: feature_set.to_string(),
                revision,
            });
        }

        Ok(samples)
    }
}

/// Strip a trailing `.<digits>` run-specific suffix (callgrind output names
/// embed the PID) so base and head benchmark keys stay comparable.
fn normalize_benchmark_name(name: &str) -> String {
    if let Some((stem, suffix)) = name.rsplit_once('.') {
        if !stem.is_empty() && !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()) {
            return stem.to_string();
        }
    }
    name.to_string()
}
