//! Measurement payload parse errors.

use crate::types::Revision;

use super::error_code::{self, ErrorCode};

/// Errors that make a whole payload unusable. A single malformed record is
/// NOT one of these — it degrades to an unparseable sample instead.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Empty measurement payload for feature set `{feature_set}` ({revision})")]
    EmptyPayload {
        feature_set: String,
        revision: Revision,
    },

    #[error("Unrecognized measurement format for feature set `{feature_set}` ({revision})")]
    UnrecognizedFormat {
        feature_set: String,
        revision: Revision,
    },

    #[error("Invalid JSON payload for feature set `{feature_set}` ({revision}): {message}")]
    InvalidJson {
        feature_set: String,
        revision: Revision,
        message: String,
    },

    #[error(
        "Duplicate sample `{benchmark}/{metric}` for feature set `{feature_set}` ({revision})"
    )]
    DuplicateSample {
        feature_set: String,
        benchmark: String,
        metric: String,
        revision: Revision,
    },
}

impl ErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateSample { .. } => error_code::DUPLICATE_SAMPLE,
            _ => error_code::PARSE_ERROR,
        }
    }
}
