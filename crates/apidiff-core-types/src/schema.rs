//! Canonical schema constants for structured logging and events
//!
//! These constants keep the field names emitted by the engine, the CLI and the
//! test capture layer in agreement.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_ANOMALY: &str = "anomaly";

// Canonical operation names
pub const OP_DIFF_SNAPSHOTS: &str = "diff_snapshots";
pub const OP_DIFF_CATEGORY: &str = "diff_category";
pub const OP_DIFF_ITEMS: &str = "diff_items";
pub const OP_PARSE_SNAPSHOT: &str = "parse_snapshot";
