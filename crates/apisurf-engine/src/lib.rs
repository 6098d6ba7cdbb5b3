//! apisurf Engine - Orchestration layer
//!
//! Provides the `list` and `check` pipelines that coordinate the pure core
//! (extraction, diffing) with the filesystem collaborators in the store.

pub mod commands;

pub use commands::check::{check_api, CheckOptions, CheckOutcome, CheckReport};
pub use commands::list::{list_features, ListOptions, ListResult};
