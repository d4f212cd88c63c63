//! Report renderers — markdown (sticky comment) and structured JSON.

pub mod json;
pub mod markdown;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;

use crate::grouping::Report;

/// Trait that every report renderer implements. Rendering is pure: the
/// same `Report` must produce byte-identical output on every call.
pub trait Reporter {
    fn name(&self) -> &'static str;

    fn generate(&self, report: &Report) -> Result<String, String>;
}
