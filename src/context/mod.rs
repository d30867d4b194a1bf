//! Request-scoped context and logger binding.

pub mod binding;
pub mod chain;

pub use binding::*;
pub use chain::*;
