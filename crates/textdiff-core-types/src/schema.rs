//! Canonical schema constants for structured logging
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Diff call context
pub const FIELD_LABEL: &str = "label";
pub const FIELD_TOOL: &str = "tool";
pub const FIELD_A_LEN: &str = "a_len";
pub const FIELD_B_LEN: &str = "b_len";
pub const FIELD_OUTPUT_LEN: &str = "output_len";
pub const FIELD_EXIT_CODE: &str = "exit_code";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Canonical operation names
pub const OP_DIFF: &str = "diff";
