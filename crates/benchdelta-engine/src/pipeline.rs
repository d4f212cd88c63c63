//! End-to-end comparison pipeline: validate → parse → match → diff →
//! gate → group.

use tracing::{debug, info};

use benchdelta_core::config::CompareConfig;
use benchdelta_core::errors::EngineError;
use benchdelta_core::types::{ClassificationCounts, DiffResult, MetricSample, Revision};

use crate::gate::{RegressionGate, Verdict};
use crate::grouping::{self, Report};
use crate::{diff, matching, parsers};

/// One raw measurement payload for one (feature set, revision) matrix cell.
#[derive(Debug, Clone)]
pub struct MeasurementPayload {
    pub feature_set: String,
    pub revision: Revision,
    pub raw: String,
}

/// Everything one engine invocation produces.
#[derive(Debug, Clone)]
pub struct CompareOutcome {
    pub report: Report,
    pub verdict: Verdict,
    pub diffs: Vec<DiffResult>,
}

/// Run the full comparison over the supplied payloads.
///
/// Payload order carries no meaning: matching, grouping, and rendering are
/// insensitive to it, so matrix jobs may deliver results in any order. A
/// feature set present for only one revision degrades to `new`/`removed`
/// rows rather than an error.
pub fn run_compare(
    payloads: &[MeasurementPayload],
    config: &CompareConfig,
) -> Result<CompareOutcome, EngineError> {
    config.validate()?;

    let mut samples: Vec<MetricSample> = Vec::new();
    for payload in payloads {
        let parsed = parsers::parse_payload(&payload.raw, &payload.feature_set, payload.revision)?;
        debug!(
            feature_set = %payload.feature_set,
            revision = %payload.revision,
            samples = parsed.len(),
            "parsed measurement payload"
        );
        samples.extend(parsed);
    }

    let pairs = matching::match_samples(&samples)?;
    let diffs = diff::compute_diffs(&pairs, config);
    let totals = ClassificationCounts::tally(&diffs);
    info!(
        pairs = pairs.len(),
        regressions = totals.regressions,
        improvements = totals.improvements,
        "computed metric diffs"
    );

    let verdict = RegressionGate.evaluate(&diffs, config);
    let tree = grouping::build_tree(&diffs, config);
    let report = Report {
        tree,
        totals,
        verdict,
        threshold_pct: config.regression_threshold_pct,
    };

    Ok(CompareOutcome {
        report,
        verdict,
        diffs,
    })
}
