//! Severity levels.
//!
//! Ordered `Debug < Info < Warn < Error < Fatal`. The engine filters on
//! `log::Level`, which has no fatal level, so `Fatal` is carried at
//! `log::Level::Error` and distinguished by its label.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Importance of a log event. Events below a logger's minimum are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    #[default]
    Info,
    #[serde(alias = "warning")]
    Warn,
    Error,
    Fatal,
}

pub const LEVEL_DEBUG: Severity = Severity::Debug;
pub const LEVEL_INFO: Severity = Severity::Info;
pub const LEVEL_WARN: Severity = Severity::Warn;
pub const LEVEL_ERROR: Severity = Severity::Error;
pub const LEVEL_FATAL: Severity = Severity::Fatal;

/// Minimum severity used whenever a caller does not pick one.
pub const DEFAULT_LEVEL: Severity = Severity::Info;

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Label written under the level field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }

    /// Level the record is handed to the engine at.
    pub fn as_log_level(&self) -> log::Level {
        match self {
            Severity::Debug => log::Level::Debug,
            Severity::Info => log::Level::Info,
            Severity::Warn => log::Level::Warn,
            Severity::Error | Severity::Fatal => log::Level::Error,
        }
    }

    pub fn as_level_filter(&self) -> log::LevelFilter {
        self.as_log_level().to_level_filter()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            _ => Err(Error::UnknownSeverity(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(LEVEL_DEBUG < LEVEL_INFO);
        assert!(LEVEL_INFO < LEVEL_WARN);
        assert!(LEVEL_WARN < LEVEL_ERROR);
        assert!(LEVEL_ERROR < LEVEL_FATAL);
        assert_eq!(Severity::default(), DEFAULT_LEVEL);
        assert_eq!(DEFAULT_LEVEL, Severity::Info);
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!("WARNING".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!(" fatal ".parse::<Severity>().unwrap(), Severity::Fatal);
        for level in Severity::ALL {
            assert_eq!(level.to_string().parse::<Severity>().unwrap(), level);
        }

        let err = "verbose".parse::<Severity>().unwrap_err();
        assert!(matches!(err, Error::UnknownSeverity(ref s) if s == "verbose"));
    }

    #[test]
    fn test_fatal_maps_to_error_level() {
        assert_eq!(Severity::Fatal.as_log_level(), log::Level::Error);
        assert_eq!(Severity::Warn.as_level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_severity_serde() {
        let level: Severity = serde_json::from_str(r#""warning""#).unwrap();
        assert_eq!(level, Severity::Warn);
        assert_eq!(serde_json::to_string(&Severity::Fatal).unwrap(), r#""fatal""#);
    }
}
