//! ctxlog - Context-scoped structured JSON logging
//!
//! A logger is built once per request or operation, bound to a [`Context`],
//! and retrieved wherever that context is available. Every record is one
//! JSON object per line with fixed field names:
//!
//! - `log-message` - the event message
//! - `timestamp` - RFC 3339, UTC
//! - `log-level` - `debug`, `info`, `warn`, `error` or `fatal`
//! - `caller` - `<file basename>:<line>` of the call site
//!
//! ## Architecture
//!
//! - `logging` - severities, field names, record format, handles and events
//! - `context` - immutable request-scoped value chain and logger binding
//! - `config` - serde-loadable logger configuration
//! - `sink` - in-memory output stream
//!
//! ```
//! use ctxlog::{bind, from_context, Context, Logger, MemorySink, Severity};
//!
//! let sink = MemorySink::new();
//! let (ctx, _) = bind(&Context::background(), sink.clone(), Severity::Info);
//!
//! from_context(&ctx).info().str("user", "amy").msg("logged in");
//! assert_eq!(sink.records()[0]["log-message"], "logged in");
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod sink;

pub use config::{LoggerConfig, Output};
pub use context::{bind, bind_handle, from_context, Context};
pub use error::{Error, Result};
pub use logging::{
    field_names, Destination, Event, Fields, Handle, Logger, Severity, DEFAULT_LEVEL,
    LEVEL_DEBUG, LEVEL_ERROR, LEVEL_FATAL, LEVEL_INFO, LEVEL_WARN,
};
pub use sink::MemorySink;

/// Adapt an existing engine logger without reconfiguring it.
pub fn from_raw_logger<L: log::Log + 'static>(native: L) -> Handle {
    Handle::wrap(native)
}
