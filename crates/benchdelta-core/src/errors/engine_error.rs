//! Top-level engine error.

use super::error_code::{self, ErrorCode};
use super::{ConfigError, ParseError};

/// Any fatal failure of one engine invocation.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Report rendering failed: {0}")]
    Render(String),
}

impl ErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Render(_) => error_code::RENDER_ERROR,
        }
    }
}
