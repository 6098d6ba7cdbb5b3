//! Baseline reader.
//!
//! Loads the required features (current + next files) and the exception
//! set, accumulating line-format problems into a [`ValidationReport`]
//! instead of failing on the first one.

pub mod layout;
pub mod parser;
pub mod report;

pub use layout::BaselineLayout;
pub use parser::{read_baseline_file, BaselineFile};
pub use report::{ProblemKind, ValidationProblem, ValidationReport};

use crate::errors::Result;
use std::collections::BTreeSet;

/// Everything read from the baseline files of one program root.
#[derive(Debug, Clone, Default)]
pub struct Baseline {
    /// Features of current and next files, in file and line order.
    pub required: Vec<String>,
    pub exceptions: BTreeSet<String>,
    pub files: Vec<BaselineFile>,
    pub report: ValidationReport,
}

/// Read every file of `layout`.
///
/// # Errors
///
/// `Io` when an existing file cannot be read.
pub fn load_baseline(layout: &BaselineLayout) -> Result<Baseline> {
    let mut baseline = Baseline::default();

    for path in layout.required_files() {
        let (file, report) = read_baseline_file(path)?;
        baseline.required.extend(file.features.iter().cloned());
        baseline.report.merge(report);
        baseline.files.push(file);
    }

    let (file, report) = read_baseline_file(&layout.exceptions)?;
    baseline.exceptions = file.features.iter().cloned().collect();
    baseline.report.merge(report);
    baseline.files.push(file);

    tracing::debug!(
        required_count = baseline.required.len(),
        exception_count = baseline.exceptions.len(),
        problems = baseline.report.len(),
        "baseline loaded"
    );
    Ok(baseline)
}
