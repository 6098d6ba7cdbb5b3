//! `list`: extract and print the API surface of a program model.

use crate::commands::extract_features;
use apisurf_core::compute_surface_digest;
use apisurf_core::{log_op_end, log_op_error, log_op_start};
use apisurf_core_types::RunId;
use apisurf_store::errors::Result;
use apisurf_store::load_program;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ListOptions {
    /// JSON semantic model written by the program loader.
    pub model: PathBuf,
    pub skip_internal: bool,
    /// Log every extracted feature at debug level.
    pub verbose: bool,
}

impl ListOptions {
    pub fn new(model: impl Into<PathBuf>) -> Self {
        Self {
            model: model.into(),
            skip_internal: true,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListResult {
    pub run_id: RunId,
    /// Sorted features.
    pub features: Vec<String>,
    pub digest: String,
}

/// Extract the sorted feature list of the model at `options.model`.
///
/// ## Errors
///
/// - `Io` / `InvalidModel`: the model cannot be loaded
/// - any invariant violation raised during extraction
pub fn list_features(options: &ListOptions) -> Result<ListResult> {
    let run_id = RunId::new();
    log_op_start!(
        "list",
        run_id = run_id.as_str(),
        model = %options.model.display()
    );
    let start = std::time::Instant::now();

    let features = load_program(&options.model)
        .and_then(|program| extract_features(&program, options.skip_internal, options.verbose))
        .map_err(|e| {
            log_op_error!(
                "list",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                run_id = run_id.as_str()
            );
            e
        })?;
    let digest = compute_surface_digest(&features);

    log_op_end!(
        "list",
        duration_ms = start.elapsed().as_millis() as u64,
        run_id = run_id.as_str(),
        feature_count = features.len()
    );

    Ok(ListResult {
        run_id,
        features,
        digest,
    })
}
