//! `check`: compare the extracted surface with the recorded baseline.
//!
//! ## Pipeline (in order):
//! 1. Load configuration (explicit path, or `apisurf.toml` at the root)
//! 2. Load the program model and extract features
//! 3. Discover and read baseline files
//! 4. Validation problems stop the run before diffing
//! 5. Sorted merge against required features and exceptions

use crate::commands::extract_features;
use apisurf_core::diff::{compare_api, ApiDiff};
use apisurf_core::{log_op_end, log_op_error, log_op_start};
use apisurf_core_types::RunId;
use apisurf_store::baseline::{load_baseline, BaselineLayout, ValidationReport};
use apisurf_store::config::ApiSurfConfig;
use apisurf_store::errors::Result;
use apisurf_store::load_program;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// JSON semantic model written by the program loader.
    pub model: PathBuf,
    /// Program root holding the baseline files.
    pub root: PathBuf,
    /// Explicit configuration file. Defaults to `<root>/apisurf.toml`.
    pub config: Option<PathBuf>,
    pub verbose: bool,
}

impl CheckOptions {
    pub fn new(model: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
        Self {
            model: model.into(),
            root: root.into(),
            config: None,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Compatible,
    /// Baseline files are malformed; no diff was computed.
    DatabaseProblems(ValidationReport),
    Differences(ApiDiff),
}

impl CheckOutcome {
    pub fn is_compatible(&self) -> bool {
        matches!(self, CheckOutcome::Compatible)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CheckOutcome::Compatible => "compatible",
            CheckOutcome::DatabaseProblems(_) => "database_problems",
            CheckOutcome::Differences(_) => "differences",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckReport {
    pub run_id: RunId,
    /// Sorted extracted features.
    pub features: Vec<String>,
    pub outcome: CheckOutcome,
}

/// Run the compatibility check.
///
/// A failed check is an `Ok` outcome; `Err` is reserved for fatal errors.
///
/// ## Errors
///
/// - `Io` / `InvalidModel` / `InvalidConfig`: inputs cannot be loaded
/// - any invariant violation raised during extraction
pub fn check_api(options: &CheckOptions) -> Result<CheckReport> {
    let run_id = RunId::new();
    log_op_start!(
        "check",
        run_id = run_id.as_str(),
        root = %options.root.display()
    );
    let start = std::time::Instant::now();

    let (features, outcome) = check_impl(options).map_err(|e| {
        log_op_error!(
            "check",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            run_id = run_id.as_str()
        );
        e
    })?;

    let diff_len = match &outcome {
        CheckOutcome::Differences(diff) => diff.entries.len(),
        _ => 0,
    };
    log_op_end!(
        "check",
        duration_ms = start.elapsed().as_millis() as u64,
        run_id = run_id.as_str(),
        outcome = outcome.label(),
        feature_count = features.len(),
        diff_len = diff_len
    );

    Ok(CheckReport {
        run_id,
        features,
        outcome,
    })
}

fn check_impl(options: &CheckOptions) -> Result<(Vec<String>, CheckOutcome)> {
    let config = match &options.config {
        Some(path) => ApiSurfConfig::load(path)?,
        None => ApiSurfConfig::load_or_default(&options.root)?,
    };

    let program = load_program(&options.model)?;
    let features = extract_features(&program, config.extract.skip_internal, options.verbose)?;

    let layout = BaselineLayout::discover(&options.root, &config.baseline)?;
    let baseline = load_baseline(&layout)?;
    if !baseline.report.is_ok() {
        for problem in baseline.report.problems() {
            tracing::debug!(baseline_file = %problem.path.display(), "{}", problem);
        }
        return Ok((features, CheckOutcome::DatabaseProblems(baseline.report)));
    }

    let diff = compare_api(
        &features,
        &baseline.required,
        &baseline.exceptions,
        &config.removal.policy(),
        config.removal.compare_options(),
    );
    let outcome = if diff.ok {
        CheckOutcome::Compatible
    } else {
        CheckOutcome::Differences(diff)
    };
    Ok((features, outcome))
}
