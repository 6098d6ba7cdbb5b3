//! Baseline file reader with line-format validation

use crate::baseline::report::{ProblemKind, ValidationReport};
use crate::errors::{io_error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Features read from one baseline file, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaselineFile {
    pub path: PathBuf,
    pub features: Vec<String>,
}

/// Read and validate a baseline file.
///
/// A missing file yields no features and no problems.
///
/// # Errors
///
/// `Io` for any read failure other than the file not existing.
pub fn read_baseline_file(path: &Path) -> Result<(BaselineFile, ValidationReport)> {
    let mut report = ValidationReport::new();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(baseline_file = %path.display(), "baseline file missing");
            return Ok((
                BaselineFile {
                    path: path.to_path_buf(),
                    features: Vec::new(),
                },
                report,
            ));
        }
        Err(e) => return Err(io_error("read_baseline_file", path, e)),
    };

    for kind in validate_baseline_str(&content) {
        tracing::debug!(baseline_file = %path.display(), problem = kind.description(), "invalid baseline");
        report.record(path, kind);
    }

    let features = parse_baseline_str(&content);
    tracing::debug!(
        baseline_file = %path.display(),
        feature_count = features.len(),
        "baseline file read"
    );
    Ok((
        BaselineFile {
            path: path.to_path_buf(),
            features,
        },
        report,
    ))
}

/// Line-format problems of a baseline file's contents.
pub fn validate_baseline_str(content: &str) -> Vec<ProblemKind> {
    let mut problems = Vec::new();
    if content.contains('\r') {
        problems.push(ProblemKind::ContainsCarriageReturn);
    }
    if content.starts_with('\n') || content.contains("\n\n") {
        problems.push(ProblemKind::ContainsBlankLine);
    }
    if content.is_empty() {
        problems.push(ProblemKind::Empty);
    } else if !content.ends_with('\n') {
        problems.push(ProblemKind::MissingFinalNewline);
    }
    problems
}

/// Trimmed lines, skipping blank lines and `#` comments.
pub fn parse_baseline_str(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
