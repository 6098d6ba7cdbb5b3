//! apisurf Store - Filesystem collaborators
//!
//! Provides:
//! - Baseline file reading with line-format validation
//! - Baseline layout discovery (`api/v*.txt`, `api/next/*.txt`, `api/except.txt`)
//! - The JSON semantic-model loader
//! - `apisurf.toml` configuration

pub mod baseline;
pub mod config;
pub mod errors;
pub mod model_loader;

// Re-export key types
pub use baseline::{load_baseline, Baseline, BaselineLayout, ValidationReport};
pub use config::ApiSurfConfig;
pub use errors::Result;
pub use model_loader::load_program;
