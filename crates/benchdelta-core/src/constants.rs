//! Shared constants for the benchdelta comparison engine.

/// benchdelta version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default regression threshold in percent. A metric must get worse by
/// strictly more than this to classify as a regression.
pub const DEFAULT_REGRESSION_THRESHOLD_PCT: f64 = 3.0;

/// Default noise tolerance in percent. Deltas within this band (inclusive)
/// classify as unchanged rather than improvement.
pub const DEFAULT_NOISE_TOLERANCE_PCT: f64 = 0.0;

/// Default metric presentation priority. The first entry is the primary
/// metric shown in per-benchmark tables; undeclared metrics sort after
/// these, alphabetically.
pub const DEFAULT_METRIC_PRIORITY: &[&str] = &["Ir", "EstimatedCycles"];

/// Marker embedded on the first line of every rendered markdown report.
/// External publishers locate a prior comment by this token and overwrite
/// it instead of posting a duplicate.
pub const REPORT_MARKER: &str = "<!-- benchdelta-sticky-report -->";
