//! Process-wide field names and caller rendering.
//!
//! Initialized once on first use and never changed afterward.

use lazy_static::lazy_static;

/// Reserved field names written by every logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    pub message: &'static str,
    pub timestamp: &'static str,
    pub level: &'static str,
    pub caller: &'static str,
    pub error: &'static str,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            message: "log-message",
            timestamp: "timestamp",
            level: "log-level",
            caller: "caller",
            error: "error",
        }
    }
}

lazy_static! {
    static ref FIELD_NAMES: FieldNames = FieldNames::default();
}

/// The global field names.
pub fn field_names() -> &'static FieldNames {
    &FIELD_NAMES
}

/// Render a source location as `<basename>:<line>`.
///
/// Everything up to and including the last `/` (or `\`) is dropped; a path
/// without a separator is kept whole.
pub fn render_caller(file: &str, line: u32) -> String {
    let basename = match file.rfind(['/', '\\']) {
        Some(idx) => &file[idx + 1..],
        None => file,
    };
    format!("{}:{}", basename, line)
}
