//! Tests for configuration loading and validation.

use std::str::FromStr;

use benchdelta_core::config::{CommentMode, CompareConfig, FeatureSetDecl};
use benchdelta_core::errors::ConfigError;

#[test]
fn defaults_match_documented_values() {
    let config = CompareConfig::default();
    assert_eq!(config.regression_threshold_pct, 3.0);
    assert_eq!(config.noise_tolerance_pct, 0.0);
    assert!(config.fail_on_regression);
    assert_eq!(config.comment_mode, CommentMode::Always);
    assert!(config.feature_sets.is_empty());
    assert_eq!(
        config.effective_metric_priority(),
        vec!["Ir".to_string(), "EstimatedCycles".to_string()]
    );
    assert!(config.validate().is_ok());
}

#[test]
fn loads_full_toml_document() {
    let raw = r#"
        regression_threshold_pct = 5.0
        noise_tolerance_pct = 0.5
        fail_on_regression = false
        comment_mode = "on-regression"
        metric_priority = ["Ir", "Dr"]

        [[feature_sets]]
        name = "default"

        [[feature_sets]]
        name = "simd"
        features = "simd,unstable"
    "#;
    let config = CompareConfig::from_toml_str(raw, "benchdelta.toml").unwrap();
    assert_eq!(config.regression_threshold_pct, 5.0);
    assert_eq!(config.noise_tolerance_pct, 0.5);
    assert!(!config.fail_on_regression);
    assert_eq!(config.comment_mode, CommentMode::OnRegression);
    assert_eq!(
        config.feature_sets,
        vec![
            FeatureSetDecl {
                name: "default".to_string(),
                features: String::new(),
            },
            FeatureSetDecl {
                name: "simd".to_string(),
                features: "simd,unstable".to_string(),
            },
        ]
    );
    assert_eq!(config.effective_metric_priority(), vec!["Ir", "Dr"]);
    assert!(config.validate().is_ok());
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config = CompareConfig::from_toml_str("regression_threshold_pct = 10.0", "x.toml").unwrap();
    assert_eq!(config.regression_threshold_pct, 10.0);
    assert_eq!(config.noise_tolerance_pct, 0.0);
    assert!(config.fail_on_regression);
    assert_eq!(config.comment_mode, CommentMode::Always);
}

#[test]
fn bad_toml_names_the_file() {
    let err = CompareConfig::from_toml_str("not toml = = =", "bad.toml").unwrap_err();
    assert!(matches!(err, ConfigError::ParseFailed { ref path, .. } if path == "bad.toml"));
}

#[test]
fn unknown_comment_mode_is_rejected() {
    assert_eq!(CommentMode::from_str("always").unwrap(), CommentMode::Always);
    assert_eq!(
        CommentMode::from_str("on-regression").unwrap(),
        CommentMode::OnRegression
    );
    assert_eq!(CommentMode::from_str("never").unwrap(), CommentMode::Never);

    let err = CommentMode::from_str("sometimes").unwrap_err();
    match err {
        ConfigError::InvalidValue { field, message } => {
            assert_eq!(field, "comment_mode");
            assert!(message.contains("sometimes"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn validate_rejects_negative_threshold() {
    let config = CompareConfig {
        regression_threshold_pct: -1.0,
        ..CompareConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(
        matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "regression_threshold_pct")
    );
}

#[test]
fn validate_rejects_non_finite_threshold() {
    let config = CompareConfig {
        regression_threshold_pct: f64::NAN,
        ..CompareConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_negative_tolerance() {
    let config = CompareConfig {
        noise_tolerance_pct: -0.5,
        ..CompareConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(
        matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "noise_tolerance_pct")
    );
}

#[test]
fn validate_rejects_duplicate_feature_sets() {
    let config = CompareConfig {
        feature_sets: vec![
            FeatureSetDecl {
                name: "default".to_string(),
                features: String::new(),
            },
            FeatureSetDecl {
                name: "default".to_string(),
                features: "simd".to_string(),
            },
        ],
        ..CompareConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateFeatureSet { ref name } if name == "default"));
}

#[test]
fn validate_rejects_duplicate_metric_priority() {
    let config = CompareConfig {
        metric_priority: vec!["Ir".to_string(), "Ir".to_string()],
        ..CompareConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateMetric { ref name } if name == "Ir"));
}
