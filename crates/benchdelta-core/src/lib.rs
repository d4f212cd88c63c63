//! Shared vocabulary for the benchdelta comparison engine.
//!
//! Subsystems:
//! - `types` — metric samples, matched pairs, diff results, classifications
//! - `config` — the immutable per-run comparison configuration
//! - `errors` — thiserror enums with stable CI-facing error codes
//! - `tracing` — logging setup via `BENCHDELTA_LOG`
//! - `constants` — defaults and the sticky report marker

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
