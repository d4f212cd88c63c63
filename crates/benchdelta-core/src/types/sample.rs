//! Measurement samples and their pairing across revisions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The revision a sample was measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Revision {
    Base,
    Head,
}

impl Revision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Head => "head",
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of one measured quantity: feature set, benchmark, metric.
///
/// `Ord` derives field order, so any map keyed by `SampleKey` iterates
/// feature set first, then benchmark, then metric.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SampleKey {
    pub feature_set: String,
    pub benchmark: String,
    pub metric: String,
}

impl SampleKey {
    pub fn new(
        feature_set: impl Into<String>,
        benchmark: impl Into<String>,
        metric: impl Into<String>,
    ) -> Self {
        Self {
            feature_set: feature_set.into(),
            benchmark: benchmark.into(),
            metric: metric.into(),
        }
    }
}

impl fmt::Display for SampleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.feature_set, self.benchmark, self.metric)
    }
}

/// One measured value for one (feature set, benchmark, metric, revision).
///
/// `value == None` means the record's identity was recoverable but its
/// value was not; downstream this classifies as `unparseable` instead of
/// aborting the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    pub feature_set: String,
    pub benchmark: String,
    pub metric: String,
    pub value: Option<f64>,
    pub revision: Revision,
}

impl MetricSample {
    pub fn key(&self) -> SampleKey {
        SampleKey {
            feature_set: self.feature_set.clone(),
            benchmark: self.benchmark.clone(),
            metric: self.metric.clone(),
        }
    }

    fn reading(&self) -> Reading {
        match self.value {
            Some(v) => Reading::Value(v),
            None => Reading::Unparseable,
        }
    }
}

/// One side of a matched pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    Value(f64),
    Unparseable,
}

impl Reading {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Unparseable => None,
        }
    }
}

impl From<&MetricSample> for Reading {
    fn from(sample: &MetricSample) -> Self {
        sample.reading()
    }
}

/// A (feature set, benchmark, metric) key with the base and head readings
/// observed for it. At least one side is present.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedPair {
    pub key: SampleKey,
    pub base: Option<Reading>,
    pub head: Option<Reading>,
}
