//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the benchdelta tracing/logging system.
///
/// Reads the `BENCHDELTA_LOG` environment variable for per-subsystem log
/// levels, e.g. `BENCHDELTA_LOG=benchdelta_engine=debug,benchdelta_cli=info`.
///
/// Falls back to `benchdelta=info` if `BENCHDELTA_LOG` is not set or is
/// invalid. Idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("BENCHDELTA_LOG")
            .unwrap_or_else(|_| EnvFilter::new("benchdelta=info"));

        // Logs go to stderr; stdout belongs to the rendered report.
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
