//! Structured logging macros.
//!
//! Thin re-exports over [`tracing`]. Logging is advisory only: no component
//! in this crate depends on a logged message for correctness, and the
//! encode/decode hot path does not log at `info` level or above.

/// Info level logging - general progress and state transitions.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        tracing::info!($($arg)*)
    };
}

/// Warning level logging - unexpected but recoverable conditions.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        tracing::warn!($($arg)*)
    };
}

/// Debug level logging - per-operation detail, safe to enable in development.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

/// Trace level logging - per-byte / per-item detail for the hot path.
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}
