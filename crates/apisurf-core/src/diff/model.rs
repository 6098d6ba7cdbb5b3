//! Diff output types.
//!
//! Entries are kept in merge order, which is lexicographic on the feature.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    /// Extracted but not recorded in any baseline file.
    Added,
    /// Required by a baseline file but no longer extracted.
    Removed,
}

impl DiffKind {
    pub fn marker(&self) -> char {
        match self {
            DiffKind::Added => '+',
            DiffKind::Removed => '-',
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffEntry {
    pub kind: DiffKind,
    pub feature: String,
}

impl DiffEntry {
    pub fn added(feature: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Added,
            feature: feature.into(),
        }
    }

    pub fn removed(feature: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Removed,
            feature: feature.into(),
        }
    }
}

impl fmt::Display for DiffEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.marker(), self.feature)
    }
}

/// Missing required features that were not reported, by the rule that
/// accepted them.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuppressedRemovals {
    pub by_exception: usize,
    pub by_port_removal: usize,
    pub by_context: usize,
}

impl SuppressedRemovals {
    pub fn total(&self) -> usize {
        self.by_exception + self.by_port_removal + self.by_context
    }
}

/// Result of comparing an extracted surface with its baseline.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiDiff {
    /// No additions and no unaccepted removals.
    pub ok: bool,
    pub entries: Vec<DiffEntry>,
    pub suppressed: SuppressedRemovals,
}

impl ApiDiff {
    pub fn added(&self) -> impl Iterator<Item = &DiffEntry> {
        self.entries.iter().filter(|e| e.kind == DiffKind::Added)
    }

    pub fn removed(&self) -> impl Iterator<Item = &DiffEntry> {
        self.entries.iter().filter(|e| e.kind == DiffKind::Removed)
    }

    /// The `+`/`-` annotated report lines, in merge order.
    pub fn report_lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}
