//! Regression gate — pure reduction of the diff set to a verdict.

use serde::{Deserialize, Serialize};

use benchdelta_core::config::{CommentMode, CompareConfig};
use benchdelta_core::types::{Classification, DiffResult};

/// The gate's decision. The caller maps `should_fail` to a nonzero exit
/// code and `should_emit_report` to whether the publish step runs at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub should_fail: bool,
    pub should_emit_report: bool,
}

/// Reduces diff results and configuration to a [`Verdict`]. No I/O.
pub struct RegressionGate;

impl RegressionGate {
    pub fn evaluate(&self, diffs: &[DiffResult], config: &CompareConfig) -> Verdict {
        let regressions = diffs
            .iter()
            .filter(|d| d.classification == Classification::Regression)
            .count();

        let should_fail = config.fail_on_regression && regressions > 0;
        let should_emit_report = match config.comment_mode {
            CommentMode::Always => true,
            CommentMode::OnRegression => regressions > 0,
            CommentMode::Never => false,
        };

        Verdict {
            should_fail,
            should_emit_report,
        }
    }
}
