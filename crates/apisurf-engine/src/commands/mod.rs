//! Command orchestration layer.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for every command:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.

pub mod check;
pub mod list;

use apisurf_core::model::Program;
use apisurf_core::{ExtractionContext, Extractor};
use apisurf_store::errors::Result;

/// Extract the sorted feature list of `program`.
pub(crate) fn extract_features(
    program: &Program,
    skip_internal: bool,
    verbose: bool,
) -> Result<Vec<String>> {
    let mut ctx = ExtractionContext::new().verbose(verbose);
    Extractor::new()
        .skip_internal(skip_internal)
        .export_program(&mut ctx, program)?;
    Ok(ctx.into_features().list())
}
