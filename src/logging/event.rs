//! Event builder.
//!
//! An event collects fields and is handed to the engine when finalized with
//! `msg`, `msgf` or `send`. A suppressed event is a no-op builder.

use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;

use log::kv::{self, Key, Source, Value, VisitSource};
use log::{Log, Record};
use serde::Serialize;

use super::fields::field_names;
use super::level::Severity;

/// Target attached to every record this crate emits.
pub const TARGET: &str = "ctxlog";

/// A named field value, already serialized.
pub type Field = (String, serde_json::Value);

pub(crate) fn to_field_value<T: Serialize + ?Sized>(value: &T) -> serde_json::Value {
    serde_json::to_value(value)
        .unwrap_or_else(|err| serde_json::Value::String(format!("marshaling error: {}", err)))
}

/// A single log event under construction.
#[must_use = "an event is only written once `msg`, `msgf` or `send` is called"]
pub struct Event<'a> {
    state: Option<EventState<'a>>,
}

struct EventState<'a> {
    engine: &'a dyn Log,
    severity: Severity,
    context: &'a [Field],
    fields: Vec<Field>,
}

impl<'a> Event<'a> {
    /// Start an event that will be written to `engine`, after the logger's
    /// `context` fields.
    pub fn new(engine: &'a dyn Log, severity: Severity, context: &'a [Field]) -> Self {
        Self {
            state: Some(EventState {
                engine,
                severity,
                context,
                fields: Vec::new(),
            }),
        }
    }

    /// An event below the logger's threshold. Every method is a no-op.
    pub fn disabled() -> Self {
        Self { state: None }
    }

    pub fn enabled(&self) -> bool {
        self.state.is_some()
    }

    pub fn severity(&self) -> Option<Severity> {
        self.state.as_ref().map(|s| s.severity)
    }

    pub fn str(self, key: &str, value: &str) -> Self {
        self.push(key, || serde_json::Value::from(value))
    }

    pub fn int(self, key: &str, value: i64) -> Self {
        self.push(key, || serde_json::Value::from(value))
    }

    pub fn uint(self, key: &str, value: u64) -> Self {
        self.push(key, || serde_json::Value::from(value))
    }

    /// Non-finite floats are written as `null`.
    pub fn float(self, key: &str, value: f64) -> Self {
        self.push(key, || serde_json::Value::from(value))
    }

    pub fn bool(self, key: &str, value: bool) -> Self {
        self.push(key, || serde_json::Value::from(value))
    }

    /// Attach any serializable value. Serialization failures are recorded
    /// in place of the value.
    pub fn field<T: Serialize + ?Sized>(self, key: &str, value: &T) -> Self {
        self.push(key, || to_field_value(value))
    }

    /// Attach an error under the error field.
    pub fn err(self, err: &dyn StdError) -> Self {
        self.push(field_names().error, || serde_json::Value::from(err.to_string()))
    }

    /// Finalize with a message.
    #[track_caller]
    pub fn msg(self, message: &str) {
        self.dispatch(format_args!("{}", message), Location::caller());
    }

    /// Finalize with a formatted message, e.g. `msgf(format_args!("{} items", n))`.
    #[track_caller]
    pub fn msgf(self, args: fmt::Arguments<'_>) {
        self.dispatch(args, Location::caller());
    }

    /// Finalize without a message.
    #[track_caller]
    pub fn send(self) {
        self.dispatch(format_args!(""), Location::caller());
    }

    fn push<F>(mut self, key: &str, value: F) -> Self
    where
        F: FnOnce() -> serde_json::Value,
    {
        if let Some(state) = self.state.as_mut() {
            state.fields.push((key.to_string(), value()));
        }
        self
    }

    fn dispatch(self, args: fmt::Arguments<'_>, location: &'static Location<'static>) {
        let Some(state) = self.state else {
            return;
        };

        let source = EventSource {
            level: state.severity.as_str(),
            context: state.context,
            fields: &state.fields,
        };

        state.engine.log(
            &Record::builder()
                .args(args)
                .level(state.severity.as_log_level())
                .target(TARGET)
                .file(Some(location.file()))
                .line(Some(location.line()))
                .key_values(&source)
                .build(),
        );
    }
}

impl fmt::Debug for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            Some(state) => f
                .debug_struct("Event")
                .field("severity", &state.severity)
                .field("fields", &state.fields)
                .finish(),
            None => f.write_str("Event(disabled)"),
        }
    }
}

/// Key-values of one event: level label, logger fields, event fields.
struct EventSource<'a> {
    level: &'static str,
    context: &'a [Field],
    fields: &'a [Field],
}

impl Source for EventSource<'_> {
    fn visit<'kvs>(&'kvs self, visitor: &mut dyn VisitSource<'kvs>) -> Result<(), kv::Error> {
        visitor.visit_pair(Key::from_str(field_names().level), Value::from(self.level))?;
        for (key, value) in self.context.iter().chain(self.fields.iter()) {
            visitor.visit_pair(Key::from_str(key), Value::from_serde(value))?;
        }
        Ok(())
    }
}
