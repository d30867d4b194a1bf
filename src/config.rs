//! Logger configuration.
//!
//! Supplied by the embedding application, typically as part of its own
//! config file. Nothing here reads the environment.

use serde::{Deserialize, Serialize};

use crate::context::{bind_handle, Context};
use crate::error::Result;
use crate::logging::{Handle, Severity};

/// Standard stream a configured logger writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    #[default]
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: Severity,
    pub output: Output,
}

impl LoggerConfig {
    pub fn new(level: Severity, output: Output) -> Self {
        Self { level, output }
    }

    /// Parse from JSON. Missing keys take their defaults (`info`, `stdout`).
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn build(&self) -> Handle {
        match self.output {
            Output::Stdout => Handle::stdout(self.level),
            Output::Stderr => Handle::stderr(self.level),
        }
    }

    /// Build a logger and bind it to a child of `parent`.
    pub fn bind(&self, parent: &Context) -> (Context, Handle) {
        bind_handle(parent, self.build())
    }
}
