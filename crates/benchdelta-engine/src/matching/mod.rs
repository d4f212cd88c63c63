//! Sample matcher — pairs base and head samples by exact identity key.

use std::collections::BTreeMap;

use benchdelta_core::errors::ParseError;
use benchdelta_core::types::{MatchedPair, MetricSample, Reading, Revision, SampleKey};

/// Produce one `MatchedPair` per distinct (feature set, benchmark, metric)
/// key observed in either revision. Exact key match only — a renamed
/// benchmark surfaces as one `removed` plus one `new` pair.
///
/// Built over a `BTreeMap`, so the result order is a pure function of the
/// key set, independent of input enumeration order. A second sample for the
/// same key and revision is a duplicate, which parsing should already have
/// rejected within a payload; across payloads it is rejected here.
pub fn match_samples(samples: &[MetricSample]) -> Result<Vec<MatchedPair>, ParseError> {
    let mut slots: BTreeMap<SampleKey, (Option<Reading>, Option<Reading>)> = BTreeMap::new();

    for sample in samples {
        let slot = slots.entry(sample.key()).or_default();
        let side = match sample.revision {
            Revision::Base => &mut slot.0,
            Revision::Head => &mut slot.1,
        };
        if side.is_some() {
            return Err(ParseError::DuplicateSample {
                feature_set: sample.feature_set.clone(),
                benchmark: sample.benchmark.clone(),
                metric: sample.metric.clone(),
                revision: sample.revision,
            });
        }
        *side = Some(Reading::from(sample));
    }

    Ok(slots
        .into_iter()
        .map(|(key, (base, head))| MatchedPair { key, base, head })
        .collect())
}
