//! API diff engine.
//!
//! Merges the extracted surface with the required baseline and classifies
//! every discrepancy as an addition, an accepted removal, or a breaking
//! removal.
//!
//! ## Entry point
//!
//! ```
//! use apisurf_core::diff::{compare_api, render_report, CompareOptions, PortAllowList};
//! use std::collections::BTreeSet;
//!
//! let features = vec!["pkg x, func F()".to_string()];
//! let diff = compare_api(
//!     &features,
//!     &[],
//!     &BTreeSet::new(),
//!     &PortAllowList::default(),
//!     CompareOptions::default(),
//! );
//! assert!(!diff.ok);
//! assert_eq!(render_report(&diff), "+pkg x, func F()\n");
//! ```

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{
    compare_api, feature_without_context, CompareOptions, PortAllowList, RemovalPolicy,
    DEFAULT_REMOVED_PORTS,
};
pub use human_summary::{render_human_summary, render_report};
pub use model::{ApiDiff, DiffEntry, DiffKind, SuppressedRemovals};
