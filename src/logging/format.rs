//! JSON record formatting for the engine.
//!
//! One object per line, in the order: timestamp, level, attached fields,
//! caller, message.

use std::io::{self, Write};

use chrono::{SecondsFormat, Utc};
use log::kv::{self, Key, Value, VisitSource};
use log::Record;
use serde::Serialize;

use super::fields::{field_names, render_caller};

/// Serialize one record. Installed as the `env_logger` format function.
pub fn write_record<W: Write>(out: &mut W, record: &Record<'_>) -> io::Result<()> {
    let names = field_names();
    let mut object = ObjectWriter::begin(out)?;

    object.entry(
        names.timestamp,
        &Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    )?;

    // The level label arrives as the first key-value pair
    let mut visitor = EntryVisitor {
        object: &mut object,
        failure: None,
    };
    let visited = record.key_values().visit(&mut visitor);
    if let Some(err) = visitor.failure.take() {
        return Err(err);
    }
    visited.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    if let (Some(file), Some(line)) = (record.file(), record.line()) {
        object.entry(names.caller, &render_caller(file, line))?;
    }

    let message = record.args().to_string();
    if !message.is_empty() {
        object.entry(names.message, &message)?;
    }

    object.end()
}

struct ObjectWriter<'w, W: Write> {
    out: &'w mut W,
    first: bool,
}

impl<'w, W: Write> ObjectWriter<'w, W> {
    fn begin(out: &'w mut W) -> io::Result<Self> {
        out.write_all(b"{")?;
        Ok(Self { out, first: true })
    }

    fn entry<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> io::Result<()> {
        if !self.first {
            self.out.write_all(b",")?;
        }
        self.first = false;
        serde_json::to_writer(&mut *self.out, key)?;
        self.out.write_all(b":")?;
        serde_json::to_writer(&mut *self.out, value)?;
        Ok(())
    }

    fn end(self) -> io::Result<()> {
        self.out.write_all(b"}\n")
    }
}

struct EntryVisitor<'a, 'w, W: Write> {
    object: &'a mut ObjectWriter<'w, W>,
    failure: Option<io::Error>,
}

impl<'kvs, W: Write> VisitSource<'kvs> for EntryVisitor<'_, '_, W> {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), kv::Error> {
        self.object.entry(key.as_str(), &value).map_err(|err| {
            self.failure = Some(err);
            kv::Error::msg("failed to write field")
        })
    }
}
