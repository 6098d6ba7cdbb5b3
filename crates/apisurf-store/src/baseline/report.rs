//! Validation problems found in baseline files.
//!
//! Problems are accumulated across every file of a run so they can be
//! reported together; a non-empty report fails the run before diffing.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    ContainsCarriageReturn,
    ContainsBlankLine,
    Empty,
    MissingFinalNewline,
}

impl ProblemKind {
    pub fn description(&self) -> &'static str {
        match self {
            ProblemKind::ContainsCarriageReturn => "contains CRLFs",
            ProblemKind::ContainsBlankLine => "contains a blank line",
            ProblemKind::Empty => "empty file",
            ProblemKind::MissingFinalNewline => "missing final newline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationProblem {
    pub path: PathBuf,
    pub kind: ProblemKind,
}

impl fmt::Display for ValidationProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.kind.description())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    problems: Vec<ValidationProblem>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, path: &Path, kind: ProblemKind) {
        self.problems.push(ValidationProblem {
            path: path.to_path_buf(),
            kind,
        });
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.problems.extend(other.problems);
    }

    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn problems(&self) -> &[ValidationProblem] {
        &self.problems
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_display() {
        let mut report = ValidationReport::new();
        report.record(Path::new("api/v1.txt"), ProblemKind::MissingFinalNewline);
        assert!(!report.is_ok());
        assert_eq!(
            report.problems()[0].to_string(),
            "api/v1.txt: missing final newline"
        );
    }

    #[test]
    fn test_merge_accumulates() {
        let mut a = ValidationReport::new();
        a.record(Path::new("a.txt"), ProblemKind::Empty);
        let mut b = ValidationReport::new();
        b.record(Path::new("b.txt"), ProblemKind::ContainsCarriageReturn);
        b.record(Path::new("b.txt"), ProblemKind::ContainsBlankLine);
        a.merge(b);
        assert_eq!(a.len(), 3);
    }
}
