//! Logging macros.
//!
//! Shorthand for emitting an event with `key = value` fields on any
//! [`Logger`](crate::Logger):
//!
//! ```
//! use ctxlog::{log_info, Context};
//!
//! let ctx = Context::background();
//! log_info!(ctx.logger(), "batch received", batch_id = "b-1", traces = 12);
//! ```

/// Log a debug message with fields.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $message:expr $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::Logger::debug(&$logger)
            $(.field(stringify!($key), &$value))*
            .msg($message)
    };
}

/// Log an info message with fields.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $message:expr $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::Logger::info(&$logger)
            $(.field(stringify!($key), &$value))*
            .msg($message)
    };
}

/// Log a warning message with fields.
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $message:expr $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::Logger::warn(&$logger)
            $(.field(stringify!($key), &$value))*
            .msg($message)
    };
}

/// Log an error message with fields.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $message:expr $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::Logger::error(&$logger)
            $(.field(stringify!($key), &$value))*
            .msg($message)
    };
}

/// Log a fatal message with fields. The process keeps running.
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $message:expr $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::Logger::fatal(&$logger)
            $(.field(stringify!($key), &$value))*
            .msg($message)
    };
}
