//! Sorted merge of extracted and required features.

use crate::diff::model::{ApiDiff, DiffEntry, SuppressedRemovals};
use regex::Regex;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};
use std::sync::OnceLock;

/// Ports whose features may disappear without being reported.
pub const DEFAULT_REMOVED_PORTS: [&str; 2] = ["darwin-386", "darwin-386-cgo"];

/// Decides whether a missing required feature belongs to a discontinued
/// platform.
pub trait RemovalPolicy {
    fn is_port_removed(&self, feature: &str) -> bool;
}

/// Matches features carrying a `(<port>)` context for any listed port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortAllowList {
    markers: Vec<String>,
}

impl PortAllowList {
    pub fn new<I, S>(ports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            markers: ports
                .into_iter()
                .map(|p| format!("({})", p.as_ref()))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            markers: Vec::new(),
        }
    }
}

impl Default for PortAllowList {
    fn default() -> Self {
        Self::new(DEFAULT_REMOVED_PORTS)
    }
}

impl RemovalPolicy for PortAllowList {
    fn is_port_removed(&self, feature: &str) -> bool {
        self.markers.iter().any(|m| feature.contains(m.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOptions {
    /// Accept a missing feature whose context-free form is still extracted.
    pub strip_context: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            strip_context: true,
        }
    }
}

static CONTEXT_RX: OnceLock<Option<Regex>> = OnceLock::new();

/// `f` with every ` (<context>)` group removed.
pub fn feature_without_context(f: &str) -> Cow<'_, str> {
    if !f.contains('(') {
        return Cow::Borrowed(f);
    }
    match CONTEXT_RX.get_or_init(|| Regex::new(r" \(\S+?\)").ok()) {
        Some(rx) => rx.replace_all(f, ""),
        None => Cow::Borrowed(f),
    }
}

/// Compare the extracted `features` with the `required` baseline.
///
/// Both lists are sorted before merging. A feature only in `features` is an
/// addition. A feature only in `required` is a removal unless it is listed
/// in `exceptions`, belongs to a removed port, or its context-free form is
/// still extracted.
pub fn compare_api(
    features: &[String],
    required: &[String],
    exceptions: &BTreeSet<String>,
    policy: &dyn RemovalPolicy,
    options: CompareOptions,
) -> ApiDiff {
    let feature_set: HashSet<&str> = features.iter().map(String::as_str).collect();

    let mut features: Vec<&str> = features.iter().map(String::as_str).collect();
    let mut required: Vec<&str> = required.iter().map(String::as_str).collect();
    features.sort_unstable();
    required.sort_unstable();
    // A feature may be recorded in more than one baseline file.
    required.dedup();

    let mut entries = Vec::new();
    let mut suppressed = SuppressedRemovals::default();
    let (mut fi, mut ri) = (0, 0);

    let mut missing = |r: &str, entries: &mut Vec<DiffEntry>| {
        if exceptions.contains(r) {
            suppressed.by_exception += 1;
        } else if policy.is_port_removed(r) {
            suppressed.by_port_removal += 1;
        } else if options.strip_context
            && feature_set.contains(feature_without_context(r).as_ref())
        {
            suppressed.by_context += 1;
        } else {
            entries.push(DiffEntry::removed(r));
        }
    };

    loop {
        match (features.get(fi), required.get(ri)) {
            (None, None) => break,
            (None, Some(&r)) => {
                missing(r, &mut entries);
                ri += 1;
            }
            (Some(&f), None) => {
                entries.push(DiffEntry::added(f));
                fi += 1;
            }
            (Some(&f), Some(&r)) => match r.cmp(f) {
                Ordering::Less => {
                    missing(r, &mut entries);
                    ri += 1;
                }
                Ordering::Greater => {
                    entries.push(DiffEntry::added(f));
                    fi += 1;
                }
                Ordering::Equal => {
                    fi += 1;
                    ri += 1;
                }
            },
        }
    }

    tracing::debug!(
        diff_len = entries.len(),
        suppressed = suppressed.total(),
        "api comparison complete"
    );
    ApiDiff {
        ok: entries.is_empty(),
        entries,
        suppressed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn compare(features: &[&str], required: &[&str], exceptions: &[&str]) -> ApiDiff {
        let exceptions: BTreeSet<String> = exceptions.iter().map(|s| s.to_string()).collect();
        compare_api(
            &strings(features),
            &strings(required),
            &exceptions,
            &PortAllowList::default(),
            CompareOptions::default(),
        )
    }

    #[test]
    fn test_identical_sets_are_ok() {
        let diff = compare(&["pkg x, func F()"], &["pkg x, func F()"], &[]);
        assert!(diff.ok);
        assert!(diff.entries.is_empty());
    }

    #[test]
    fn test_merge_interleaves_in_order() {
        let diff = compare(
            &["pkg x, func B()", "pkg x, func D()", "pkg x, func A()"],
            &["pkg x, func C()", "pkg x, func A()"],
            &[],
        );
        assert!(!diff.ok);
        assert_eq!(
            diff.report_lines(),
            vec![
                "+pkg x, func B()".to_string(),
                "-pkg x, func C()".to_string(),
                "+pkg x, func D()".to_string(),
            ]
        );
    }

    #[test]
    fn test_context_stripped_match_is_accepted() {
        let diff = compare(
            &["pkg syscall, const EPOLLIN = 1"],
            &[
                "pkg syscall (linux-amd64), const EPOLLIN = 1",
                "pkg syscall, const EPOLLIN = 1",
            ],
            &[],
        );
        assert!(diff.ok, "{:?}", diff);
        assert_eq!(diff.suppressed.by_context, 1);
    }

    #[test]
    fn test_repeated_required_feature_matches_once() {
        let diff = compare_api(
            &strings(&["pkg x, func F()"]),
            &strings(&["pkg x, func F()", "pkg x, func F()"]),
            &BTreeSet::new(),
            &PortAllowList::default(),
            CompareOptions {
                strip_context: false,
            },
        );
        assert!(diff.ok, "{:?}", diff);
        assert!(diff.entries.is_empty());
        assert_eq!(diff.suppressed.total(), 0);
    }

    #[test]
    fn test_context_stripping_can_be_disabled() {
        let diff = compare_api(
            &strings(&["pkg syscall, const EPOLLIN = 1"]),
            &strings(&[
                "pkg syscall (linux-amd64), const EPOLLIN = 1",
                "pkg syscall, const EPOLLIN = 1",
            ]),
            &BTreeSet::new(),
            &PortAllowList::empty(),
            CompareOptions {
                strip_context: false,
            },
        );
        assert!(!diff.ok);
        assert_eq!(
            diff.report_lines(),
            vec!["-pkg syscall (linux-amd64), const EPOLLIN = 1".to_string()]
        );
    }

    #[test]
    fn test_custom_port_list() {
        let policy = PortAllowList::new(["plan9-arm"]);
        assert!(policy.is_port_removed("pkg os (plan9-arm), const O_RDONLY = 0"));
        assert!(!policy.is_port_removed("pkg os (darwin-386), const O_RDONLY = 0"));
    }

    #[test]
    fn test_feature_without_context() {
        assert_eq!(
            feature_without_context("pkg syscall (darwin-386-cgo), func Getpid() int"),
            "pkg syscall, func Getpid() int"
        );
        assert_eq!(
            feature_without_context("pkg x, func F(int) (int, error)"),
            "pkg x, func F(int) (int, error)"
        );
        assert_eq!(feature_without_context("pkg x, func F()"), "pkg x, func F()");
    }
}
