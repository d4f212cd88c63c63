//! Diff results and classification tallies.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::sample::SampleKey;

/// How a matched pair compares. Lower metric values are better for every
/// metric handled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    Regression,
    Improvement,
    Unchanged,
    New,
    Removed,
    Unparseable,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regression => "regression",
            Self::Improvement => "improvement",
            Self::Unchanged => "unchanged",
            Self::New => "new",
            Self::Removed => "removed",
            Self::Unparseable => "unparseable",
        }
    }

    pub fn all() -> &'static [Classification] {
        &[
            Self::Regression,
            Self::Improvement,
            Self::Unchanged,
            Self::New,
            Self::Removed,
            Self::Unparseable,
        ]
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified delta for one (feature set, benchmark, metric) key.
///
/// `delta` is present only when both values are; `delta_pct` additionally
/// requires `base > 0`. No rounding happens here — render-time only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffResult {
    pub key: SampleKey,
    pub base: Option<f64>,
    pub head: Option<f64>,
    pub delta: Option<f64>,
    pub delta_pct: Option<f64>,
    pub classification: Classification,
}

/// Tallies of each classification over a diff set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationCounts {
    pub regressions: usize,
    pub improvements: usize,
    pub unchanged: usize,
    pub new: usize,
    pub removed: usize,
    pub unparseable: usize,
}

impl ClassificationCounts {
    pub fn record(&mut self, classification: Classification) {
        match classification {
            Classification::Regression => self.regressions += 1,
            Classification::Improvement => self.improvements += 1,
            Classification::Unchanged => self.unchanged += 1,
            Classification::New => self.new += 1,
            Classification::Removed => self.removed += 1,
            Classification::Unparseable => self.unparseable += 1,
        }
    }

    pub fn tally<'a>(diffs: impl IntoIterator<Item = &'a DiffResult>) -> Self {
        let mut counts = Self::default();
        for diff in diffs {
            counts.record(diff.classification);
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.regressions
            + self.improvements
            + self.unchanged
            + self.new
            + self.removed
            + self.unparseable
    }
}
