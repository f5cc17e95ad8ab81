//! Core types shared across Sinophone facilities
//!
//! This crate provides the canonical schema constants used by the logging
//! macros and by anything that inspects captured log events:
//!
//! - **Field keys**: component, op, event, durations, collection sizes
//! - **Event names**: start / end / end_error

pub mod schema;
