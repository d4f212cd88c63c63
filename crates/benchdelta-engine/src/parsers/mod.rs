//! Measurement payload parsing.
//!
//! Every recognized raw format gets one adapter implementing
//! [`MetricParser`]; all adapters normalize into the same `MetricSample`
//! form, so new backends never touch the diff or render logic.

pub mod traits;

mod callgrind;
mod numeric;
mod summary_json;

pub use callgrind::CallgrindParser;
pub use summary_json::SummaryJsonParser;
pub use traits::MetricParser;

use benchdelta_core::errors::ParseError;
use benchdelta_core::types::{MetricSample, Revision};

/// Parse one raw payload for one (feature set, revision), auto-detecting
/// the format. Fails when the payload is empty or no adapter recognizes it.
pub fn parse_payload(
    raw: &str,
    feature_set: &str,
    revision: Revision,
) -> Result<Vec<MetricSample>, ParseError> {
    if raw.trim().is_empty() {
        return Err(ParseError::EmptyPayload {
            feature_set: feature_set.to_string(),
            revision,
        });
    }

    let adapters: [&dyn MetricParser; 2] = [&SummaryJsonParser, &CallgrindParser];
    for adapter in adapters {
        if adapter.sniff(raw) {
            return adapter.parse(raw, feature_set, revision);
        }
    }

    Err(ParseError::UnrecognizedFormat {
        feature_set: feature_set.to_string(),
        revision,
    })
}
