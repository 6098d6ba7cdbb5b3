//! apisurf Core - API surface canonicalization and diffing
//!
//! This crate provides the pure, filesystem-free half of apisurf:
//! - The semantic model handed over by a program loader
//! - The scope stack that prefixes every feature line
//! - The type canonicalizer and constant-value formatting
//! - The feature extractor and its feature set
//! - The sorted-merge diff engine with exception and port-removal rules
//! - The surface digest
//!
//! Invariant violations are returned as [`ApiSurfError`] values and abort
//! the run; nothing in this crate catches and continues.

pub mod canonical;
pub mod diff;
pub mod digest;
pub mod errors;
pub mod extract;
pub mod logging_facility;
pub mod model;
pub mod scope;

// Re-export commonly used types
pub use canonical::TypeWriter;
pub use diff::{compare_api, ApiDiff, CompareOptions, PortAllowList, RemovalPolicy};
pub use digest::compute_surface_digest;
pub use errors::{ApiSurfError, ExError, ExErrorKind, Result};
pub use extract::{ExtractionContext, Extractor, FeatureSet};
pub use model::{Package, Program};
pub use scope::ScopeStack;
