//! This module defines the severity scale used for console log entries.
use std::fmt;
use tracing::Level;

/// The importance of a log entry, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

impl Severity {
    /// Returns the full display name of the severity.
    pub fn name(self) -> &'static str {
        match self {
            Severity::Debug => "Debug",
            Severity::Info => "Info",
            Severity::Warn => "Warning",
            Severity::Error => "Error",
            Severity::Fatal => "Fatal",
            Severity::Panic => "Panic",
        }
    }

    /// Returns the four-character console abbreviation.
    ///
    /// The abbreviation is the first four characters of the uppercased
    /// full name, so `"Warning"` becomes `"WARN"` and `"Debug"` becomes
    /// `"DEBU"`.
    pub fn abbrev(self) -> String {
        self.name().to_uppercase()[..4].to_string()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Level> for Severity {
    /// Maps a `tracing` level onto the severity scale.
    ///
    /// `tracing` has no Fatal or Panic level, and TRACE collapses into
    /// Debug.
    fn from(level: Level) -> Self {
        match level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warn,
            Level::INFO => Severity::Info,
            Level::DEBUG | Level::TRACE => Severity::Debug,
        }
    }
}
