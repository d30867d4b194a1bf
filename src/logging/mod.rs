//! Structured JSON logging.
//!
//! Handles wrap a private `env_logger` engine; this module fixes the field
//! names and record layout every handle writes.

pub mod event;
pub mod fields;
pub mod format;
pub mod handle;
pub mod level;
pub mod structured;

pub use event::{Event, Field};
pub use fields::{field_names, render_caller, FieldNames};
pub use handle::{Destination, Fields, Handle, Logger};
pub use level::*;
