//! benchdelta — compare benchmark measurements for two revisions and emit
//! a sticky markdown report plus a pass/fail verdict.
//!
//! Exit codes: 0 = pass, 1 = regression gate failed, 2 = fatal error
//! (unusable payload or configuration).

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use tracing::info;

use benchdelta_core::config::{CommentMode, CompareConfig};
use benchdelta_core::errors::error_code::ErrorCode;
use benchdelta_core::errors::ConfigError;
use benchdelta_core::tracing::init_tracing;
use benchdelta_core::types::Revision;
use benchdelta_engine::reporters::{JsonReporter, MarkdownReporter, Reporter};
use benchdelta_engine::{run_compare, MeasurementPayload};

#[derive(Parser, Debug)]
#[command(
    name = "benchdelta",
    version,
    about = "Compare benchmark measurements for a base and a head revision"
)]
struct Args {
    /// Directory of base-revision payloads, one file per feature set
    /// (the file stem is the feature-set name)
    #[arg(long)]
    base_dir: PathBuf,

    /// Directory of head-revision payloads, one file per feature set
    #[arg(long)]
    head_dir: PathBuf,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Regression threshold percentage (overrides the config file)
    #[arg(long)]
    threshold: Option<f64>,

    /// Noise tolerance percentage (overrides the config file)
    #[arg(long)]
    noise_tolerance: Option<f64>,

    /// Whether a regression fails the run (overrides the config file)
    #[arg(long)]
    fail_on_regression: Option<bool>,

    /// Report emission policy: always | on-regression | never
    #[arg(long)]
    comment_mode: Option<CommentMode>,

    /// Where to write the markdown report (stdout when omitted)
    #[arg(long)]
    markdown_output: Option<PathBuf>,

    /// Where to write the machine-readable summary JSON
    #[arg(long)]
    summary_output: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(args) {
        Ok(true) => ExitCode::from(1),
        Ok(false) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("benchdelta: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether the regression gate failed the run.
fn run(args: Args) -> Result<bool> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(threshold) = args.threshold {
        config.regression_threshold_pct = threshold;
    }
    if let Some(tolerance) = args.noise_tolerance {
        config.noise_tolerance_pct = tolerance;
    }
    if let Some(fail_on_regression) = args.fail_on_regression {
        config.fail_on_regression = fail_on_regression;
    }
    if let Some(comment_mode) = args.comment_mode {
        config.comment_mode = comment_mode;
    }

    let mut payloads = Vec::new();
    collect_payloads(&args.base_dir, Revision::Base, &mut payloads)?;
    collect_payloads(&args.head_dir, Revision::Head, &mut payloads)?;
    if payloads.is_empty() {
        bail!(
            "no measurement payloads found under {} or {}",
            args.base_dir.display(),
            args.head_dir.display()
        );
    }

    let outcome =
        run_compare(&payloads, &config).map_err(|e| anyhow!("{}", e.code_string()))?;
    info!(
        should_fail = outcome.verdict.should_fail,
        should_emit_report = outcome.verdict.should_emit_report,
        regressions = outcome.report.totals.regressions,
        "comparison complete"
    );

    if outcome.verdict.should_emit_report {
        let markdown = MarkdownReporter
            .generate(&outcome.report)
            .map_err(|e| anyhow!("rendering markdown report: {e}"))?;
        match &args.markdown_output {
            Some(path) => fs::write(path, &markdown)
                .with_context(|| format!("writing markdown report to {}", path.display()))?,
            None => println!("{markdown}"),
        }
    }

    if let Some(path) = &args.summary_output {
        let summary = JsonReporter
            .generate(&outcome.report)
            .map_err(|e| anyhow!("rendering summary JSON: {e}"))?;
        fs::write(path, summary)
            .with_context(|| format!("writing summary JSON to {}", path.display()))?;
    }

    Ok(outcome.verdict.should_fail)
}

fn load_config(path: Option<&Path>) -> Result<CompareConfig> {
    let Some(path) = path else {
        return Ok(CompareConfig::default());
    };
    if !path.is_file() {
        let err = ConfigError::FileNotFound {
            path: path.display().to_string(),
        };
        bail!("{}", err.code_string());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config = CompareConfig::from_toml_str(&raw, &path.display().to_string())
        .map_err(|e| anyhow!("{}", e.code_string()))?;
    Ok(config)
}

/// Collect one payload per file under `dir`; the file stem names the
/// feature set. Files are visited in sorted order, though the engine does
/// not depend on it.
fn collect_payloads(
    dir: &Path,
    revision: Revision,
    payloads: &mut Vec<MeasurementPayload>,
) -> Result<()> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("reading payload directory {}", dir.display()))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    for path in files {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("reading payload {}", path.display()))?;
        payloads.push(MeasurementPayload {
            feature_set: stem.to_string(),
            revision,
            raw,
        });
    }
    Ok(())
}
