//! Per-run comparison configuration.

mod compare_config;

pub use compare_config::{CommentMode, CompareConfig, FeatureSetDecl};
