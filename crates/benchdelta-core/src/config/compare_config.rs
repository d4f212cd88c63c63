//! Comparison configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_METRIC_PRIORITY, DEFAULT_NOISE_TOLERANCE_PCT, DEFAULT_REGRESSION_THRESHOLD_PCT,
};
use crate::errors::ConfigError;

/// When the rendered report should be emitted for publishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommentMode {
    #[default]
    Always,
    OnRegression,
    Never,
}

impl CommentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::OnRegression => "on-regression",
            Self::Never => "never",
        }
    }
}

impl std::fmt::Display for CommentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommentMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Self::Always),
            "on-regression" => Ok(Self::OnRegression),
            "never" => Ok(Self::Never),
            other => Err(ConfigError::InvalidValue {
                field: "comment_mode".to_string(),
                message: format!("unknown mode `{other}` (expected always | on-regression | never)"),
            }),
        }
    }
}

/// One declared feature configuration. The name is the grouping key; the
/// feature flag string is opaque metadata carried for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSetDecl {
    pub name: String,
    #[serde(default)]
    pub features: String,
}

/// Immutable configuration for one engine invocation.
///
/// Loadable from TOML; every field has a default so a missing config file
/// means "compare with defaults".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// A delta_pct strictly above this classifies as a regression.
    pub regression_threshold_pct: f64,
    /// Deltas with |delta_pct| at or below this classify as unchanged.
    pub noise_tolerance_pct: f64,
    /// Whether at least one regression fails the run.
    pub fail_on_regression: bool,
    /// Report emission policy.
    pub comment_mode: CommentMode,
    /// Declared feature sets, in presentation order. Feature sets observed
    /// in the input but not declared here are appended alphabetically.
    pub feature_sets: Vec<FeatureSetDecl>,
    /// Metric presentation priority; the first entry is the primary metric.
    pub metric_priority: Vec<String>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            regression_threshold_pct: DEFAULT_REGRESSION_THRESHOLD_PCT,
            noise_tolerance_pct: DEFAULT_NOISE_TOLERANCE_PCT,
            fail_on_regression: true,
            comment_mode: CommentMode::default(),
            feature_sets: Vec::new(),
            metric_priority: Vec::new(),
        }
    }
}

impl CompareConfig {
    /// Parse a TOML config document. `path` is only used in error messages.
    pub fn from_toml_str(raw: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::ParseFailed {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the effective metric priority, falling back to the built-in
    /// default when none was declared.
    pub fn effective_metric_priority(&self) -> Vec<String> {
        if self.metric_priority.is_empty() {
            DEFAULT_METRIC_PRIORITY.iter().map(|m| m.to_string()).collect()
        } else {
            self.metric_priority.clone()
        }
    }

    /// Fail-fast validation, naming the offending field. Runs before any
    /// payload is parsed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.regression_threshold_pct.is_finite() || self.regression_threshold_pct < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "regression_threshold_pct".to_string(),
                message: format!(
                    "must be a non-negative finite percentage, got {}",
                    self.regression_threshold_pct
                ),
            });
        }
        if !self.noise_tolerance_pct.is_finite() || self.noise_tolerance_pct < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "noise_tolerance_pct".to_string(),
                message: format!(
                    "must be a non-negative finite percentage, got {}",
                    self.noise_tolerance_pct
                ),
            });
        }

        let mut seen = std::collections::HashSet::new();
        for decl in &self.feature_sets {
            if !seen.insert(decl.name.as_str()) {
                return Err(ConfigError::DuplicateFeatureSet {
                    name: decl.name.clone(),
                });
            }
        }

        let mut seen = std::collections::HashSet::new();
        for metric in &self.metric_priority {
            if !seen.insert(metric.as_str()) {
                return Err(ConfigError::DuplicateMetric {
                    name: metric.clone(),
                });
            }
        }

        Ok(())
    }
}
