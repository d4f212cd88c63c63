//! Summary JSON adapter.
//!
//! Payload shape: a JSON array of per-metric records,
//! `[{"benchmark": "parse", "metric": "Ir", "value": 1234567}, ...]`.
//! `value` may be a JSON number or a string in any accepted numeric shape;
//! a missing, null, or unreadable value degrades that record to an
//! unparseable sample rather than failing the payload.

use std::collections::HashSet;

use serde::Deserialize;

use benchdelta_core::errors::ParseError;
use benchdelta_core::types::{MetricSample, Revision};

use super::numeric::parse_count;
use super::traits::MetricParser;

#[derive(Debug, Deserialize)]
struct RawRecord {
    benchmark: String,
    metric: String,
    #[serde(default)]
    value: Option<serde_json::Value>,
}

/// Adapter for the summary JSON format.
pub struct SummaryJsonParser;

impl MetricParser for SummaryJsonParser {
    fn name(&self) -> &'static str {
        "summary-json"
    }

    fn sniff(&self, raw: &str) -> bool {
        raw.trim_start().starts_with('[')
    }

    fn parse(
        &self,
        raw: &str,
        feature_set: &str,
        revision: Revision,
    ) -> Result<Vec<MetricSample>, ParseError> {
        let records: Vec<RawRecord> =
            serde_json::from_str(raw).map_err(|e| ParseError::InvalidJson {
                feature_set: feature_set.to_string(),
                revision,
                message: e.to_string(),
            })?;

        if records.is_empty() {
            return Err(ParseError::EmptyPayload {
                feature_set: feature_set.to_string(),
                revision,
            });
        }

        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut samples = Vec::with_capacity(records.len());
        for record in records {
            if !seen.insert((record.benchmark.clone(), record.metric.clone())) {
                return Err(ParseError::DuplicateSample {
                    feature_set: feature_set.to_string(),
                    benchmark: record.benchmark,
                    metric: record.metric,
                    revision,
                });
            }
            let value = match &record.value {
                Some(serde_json::Value::Number(n)) => {
                    n.as_f64().filter(|v| v.is_finite() && *v >= 0.0)
                }
                Some(serde_json::Value::String(s)) => parse_count(s),
                _ => None,
            };
            samples.push(MetricSample {
                feature_set: feature_set.to_string(),
                benchmark: record.benchmark,
                metric: record.metric,
                value,
                revision,
            });
        }

        Ok(samples)
    }
}
