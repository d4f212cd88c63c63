//! MetricParser trait — the contract every format adapter implements.

use benchdelta_core::errors::ParseError;
use benchdelta_core::types::{MetricSample, Revision};

/// Trait that every measurement format adapter must implement.
pub trait MetricParser: Send + Sync {
    /// Short format name for logs.
    fn name(&self) -> &'static str;

    /// Cheap shape check: does this adapter recognize the payload?
    fn sniff(&self, raw: &str) -> bool;

    /// Parse the payload into samples. A record with recoverable identity
    /// but an unreadable value becomes a sample with `value: None`; only a
    /// payload-level failure returns an error.
    fn parse(
        &self,
        raw: &str,
        feature_set: &str,
        revision: Revision,
    ) -> Result<Vec<MetricSample>, ParseError>;
}
