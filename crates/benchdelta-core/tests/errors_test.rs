//! Tests for the benchdelta error handling system.

use std::collections::HashSet;

use benchdelta_core::errors::error_code::{self, ErrorCode};
use benchdelta_core::errors::{ConfigError, EngineError, ParseError};
use benchdelta_core::types::Revision;

#[test]
fn every_error_has_a_code() {
    let parse = ParseError::EmptyPayload {
        feature_set: "default".to_string(),
        revision: Revision::Base,
    };
    assert!(!parse.error_code().is_empty());

    let config = ConfigError::InvalidValue {
        field: "regression_threshold_pct".to_string(),
        message: "negative".to_string(),
    };
    assert!(!config.error_code().is_empty());

    let engine = EngineError::Render("broken".to_string());
    assert!(!engine.error_code().is_empty());
}

#[test]
fn code_string_format() {
    let err = ParseError::UnrecognizedFormat {
        feature_set: "simd".to_string(),
        revision: Revision::Head,
    };
    assert_eq!(
        err.code_string(),
        "[PARSE_ERROR] Unrecognized measurement format for feature set `simd` (head)"
    );

    let err = ParseError::DuplicateSample {
        feature_set: "default".to_string(),
        benchmark: "parse".to_string(),
        metric: "Ir".to_string(),
        revision: Revision::Base,
    };
    assert_eq!(err.error_code(), error_code::DUPLICATE_SAMPLE);
    assert!(err.code_string().starts_with("[DUPLICATE_SAMPLE] "));
}

#[test]
fn engine_error_delegates_inner_codes() {
    let parse: EngineError = ParseError::EmptyPayload {
        feature_set: "default".to_string(),
        revision: Revision::Base,
    }
    .into();
    assert!(matches!(parse, EngineError::Parse(_)));
    assert_eq!(parse.error_code(), error_code::PARSE_ERROR);

    let config: EngineError = ConfigError::DuplicateMetric {
        name: "Ir".to_string(),
    }
    .into();
    assert!(matches!(config, EngineError::Config(_)));
    assert_eq!(config.error_code(), error_code::CONFIG_ERROR);

    let render = EngineError::Render("oops".to_string());
    assert_eq!(render.error_code(), error_code::RENDER_ERROR);
}

#[test]
fn display_is_human_readable() {
    let errors: Vec<Box<dyn std::fmt::Display>> = vec![
        Box::new(ParseError::EmptyPayload {
            feature_set: "default".to_string(),
            revision: Revision::Base,
        }),
        Box::new(ParseError::InvalidJson {
            feature_set: "default".to_string(),
            revision: Revision::Head,
            message: "expected `,`".to_string(),
        }),
        Box::new(ConfigError::FileNotFound {
            path: "/tmp/benchdelta.toml".to_string(),
        }),
        Box::new(ConfigError::DuplicateFeatureSet {
            name: "default".to_string(),
        }),
        Box::new(EngineError::Render("bad".to_string())),
    ];

    for error in &errors {
        let msg = error.to_string();
        assert!(!msg.is_empty());
        assert!(!msg.contains("{ "), "Debug leak in: {msg}");
    }
}

#[test]
fn error_codes_unique() {
    let codes = [
        error_code::PARSE_ERROR,
        error_code::DUPLICATE_SAMPLE,
        error_code::CONFIG_ERROR,
        error_code::RENDER_ERROR,
    ];
    let unique: HashSet<&str> = codes.iter().copied().collect();
    assert_eq!(codes.len(), unique.len(), "duplicate error codes found");
}
