//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";

// Surface identifiers
pub const FIELD_PACKAGE: &str = "package";
pub const FIELD_FEATURE: &str = "feature";
pub const FIELD_BASELINE_FILE: &str = "baseline_file";

// Collection sizes
pub const FIELD_FEATURE_COUNT: &str = "feature_count";
pub const FIELD_REQUIRED_COUNT: &str = "required_count";
pub const FIELD_DIFF_LEN: &str = "diff_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
