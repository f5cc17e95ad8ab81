//! Operation logging macros
//!
//! Every engine operation that does real work (`phonology_refresh`,
//! `phonology_collocations`, `definition_build`, `load_definition`) brackets
//! itself with a `start` event and exactly one `end` or `end_error` event.
//! All three carry `component` and `op`; the closing events add
//! `duration_ms` plus the collection sizes from
//! [`sinophone_core_types::schema`].

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use sinophone_core::log_op_start;
/// log_op_start!("phonology_collocations");
/// log_op_start!("phonology_refresh", syllable_count = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = sinophone_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = sinophone_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// `duration_ms` is mandatory; inventory and result sizes follow it.
///
/// # Example
///
/// ```
/// # use sinophone_core::log_op_end;
/// log_op_end!("phonology_collocations", duration_ms = 2, collocation_count = 18);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = sinophone_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = sinophone_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log a failed operation
///
/// The error is converted into an [`ExError`](crate::errors::ExError) so the
/// event carries the stable `err.code` next to `err.kind`.
///
/// # Example
///
/// ```
/// # use sinophone_core::{log_op_error, errors::SinophoneError};
/// let err = SinophoneError::Io {
///     path: "wuu.toml".to_string(),
///     message: "not found".to_string(),
/// };
/// log_op_error!("load_definition", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = sinophone_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = sinophone_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($field)*
        );
    }};
}
