//! Logger handles.
//!
//! A `Handle` owns a private `env_logger::Logger` (never installed as the
//! global logger) configured with the JSON record format, a target stream
//! and a minimum level. Handles are cheap to clone and safe to share.

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use env_logger::{Target, WriteStyle};
use log::{Log, Metadata};
use serde::Serialize;

use super::event::{to_field_value, Event, Field, TARGET};
use super::format::write_record;
use super::level::{Severity, DEFAULT_LEVEL};

/// Leveled, field-annotated event emission.
pub trait Logger: Send + Sync {
    fn debug(&self) -> Event<'_>;
    fn info(&self) -> Event<'_>;
    fn warn(&self) -> Event<'_>;
    fn error(&self) -> Event<'_>;
    fn fatal(&self) -> Event<'_>;

    /// Start a child logger carrying extra fields.
    fn with(&self) -> Fields;
}

/// Where a handle's records go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    Stderr,
    /// A caller-supplied writer.
    Writer,
    /// A wrapped engine logger; the destination is whatever it was built with.
    Native,
}

#[derive(Clone)]
pub struct Handle {
    inner: Arc<Inner>,
}

struct Inner {
    engine: Arc<dyn Log>,
    min: Option<Severity>,
    destination: Destination,
    fields: Vec<Field>,
}

impl Handle {
    /// Build a logger writing to `out`.
    pub fn new<W: Write + Send + 'static>(out: W, level: Severity) -> Self {
        Self::build(Target::Pipe(Box::new(out)), Destination::Writer, level)
    }

    pub fn stdout(level: Severity) -> Self {
        Self::build(Target::Stdout, Destination::Stdout, level)
    }

    pub fn stderr(level: Severity) -> Self {
        Self::build(Target::Stderr, Destination::Stderr, level)
    }

    fn build(target: Target, destination: Destination, level: Severity) -> Self {
        let engine = env_logger::Builder::new()
            .format(|buf, record| write_record(buf, record))
            .target(target)
            .write_style(WriteStyle::Never)
            .filter_level(level.as_level_filter())
            .build();

        log::trace!(
            "LOGGER_CONSTRUCTED destination={:?} level={}",
            destination,
            level
        );

        Self::from_parts(Arc::new(engine), Some(level), destination, Vec::new())
    }

    /// Adapt an already-built engine logger as is. Its own format and filter
    /// apply; no minimum is added on top.
    pub fn wrap<L: Log + 'static>(native: L) -> Self {
        Self::from_parts(Arc::new(native), None, Destination::Native, Vec::new())
    }

    fn from_parts(
        engine: Arc<dyn Log>,
        min: Option<Severity>,
        destination: Destination,
        fields: Vec<Field>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                engine,
                min,
                destination,
                fields,
            }),
        }
    }

    /// Configured minimum. `None` for wrapped loggers.
    pub fn level(&self) -> Option<Severity> {
        self.inner.min
    }

    pub fn destination(&self) -> Destination {
        self.inner.destination
    }

    /// Fields attached through `with()`, in attachment order.
    pub fn fields(&self) -> &[Field] {
        &self.inner.fields
    }

    pub fn enabled(&self, severity: Severity) -> bool {
        if self.inner.min.is_some_and(|min| severity < min) {
            return false;
        }
        let metadata = Metadata::builder()
            .level(severity.as_log_level())
            .target(TARGET)
            .build();
        self.inner.engine.enabled(&metadata)
    }

    pub fn flush(&self) {
        self.inner.engine.flush();
    }

    /// Whether both handles are the same logger instance.
    pub fn ptr_eq(&self, other: &Handle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn event(&self, severity: Severity) -> Event<'_> {
        if self.enabled(severity) {
            Event::new(self.inner.engine.as_ref(), severity, &self.inner.fields)
        } else {
            Event::disabled()
        }
    }
}

impl Default for Handle {
    /// Stdout at the default level.
    fn default() -> Self {
        Self::stdout(DEFAULT_LEVEL)
    }
}

impl From<env_logger::Logger> for Handle {
    fn from(native: env_logger::Logger) -> Self {
        Self::wrap(native)
    }
}

impl PartialEq for Handle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Handle {}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("level", &self.inner.min)
            .field("destination", &self.inner.destination)
            .field("fields", &self.inner.fields.len())
            .finish()
    }
}

impl Logger for Handle {
    fn debug(&self) -> Event<'_> {
        self.event(Severity::Debug)
    }

    fn info(&self) -> Event<'_> {
        self.event(Severity::Info)
    }

    fn warn(&self) -> Event<'_> {
        self.event(Severity::Warn)
    }

    fn error(&self) -> Event<'_> {
        self.event(Severity::Error)
    }

    fn fatal(&self) -> Event<'_> {
        self.event(Severity::Fatal)
    }

    fn with(&self) -> Fields {
        Fields {
            parent: self.clone(),
            fields: self.inner.fields.clone(),
        }
    }
}

/// Builder for a child logger with extra fields. The child shares the
/// parent's engine, level and destination.
#[derive(Debug)]
#[must_use = "call `logger()` to obtain the child logger"]
pub struct Fields {
    parent: Handle,
    fields: Vec<Field>,
}

impl Fields {
    pub fn str(self, key: &str, value: &str) -> Self {
        self.push(key, serde_json::Value::from(value))
    }

    pub fn int(self, key: &str, value: i64) -> Self {
        self.push(key, serde_json::Value::from(value))
    }

    pub fn bool(self, key: &str, value: bool) -> Self {
        self.push(key, serde_json::Value::from(value))
    }

    pub fn field<T: Serialize + ?Sized>(self, key: &str, value: &T) -> Self {
        self.push(key, to_field_value(value))
    }

    pub fn logger(self) -> Handle {
        let parent = &self.parent.inner;
        Handle::from_parts(
            Arc::clone(&parent.engine),
            parent.min,
            parent.destination,
            self.fields,
        )
    }

    fn push(mut self, key: &str, value: serde_json::Value) -> Self {
        self.fields.push((key.to_string(), value));
        self
    }
}
