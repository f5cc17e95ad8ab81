//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Phonology identifiers
pub const FIELD_SYLLABLE: &str = "syllable";
pub const FIELD_PHONETIC: &str = "phonetic";
pub const FIELD_DEFINITION_PATH: &str = "definition_path";

// Collection sizes
pub const FIELD_SYLLABLE_COUNT: &str = "syllable_count";
pub const FIELD_INITIAL_COUNT: &str = "initial_count";
pub const FIELD_FINAL_COUNT: &str = "final_count";
pub const FIELD_TONE_COUNT: &str = "tone_count";
pub const FIELD_CONSTRAINT_COUNT: &str = "constraint_count";
pub const FIELD_RULE_COUNT: &str = "rule_count";
pub const FIELD_COLLOCATION_COUNT: &str = "collocation_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
