//! This module defines the structure for a single log entry.
use crate::severity::Severity;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;

/// A field value captured from a log call site.
///
/// The set of representations is closed: values recorded through the
/// collector land in the variant matching how they were recorded, and
/// anything without a dedicated variant carries its debug rendering in
/// `Other`. Rendering never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A plain string value, used verbatim.
    Text(String),
    /// A signed integer value.
    Int(i64),
    /// An unsigned integer value.
    Uint(u64),
    /// A floating point value.
    Float(f64),
    /// A boolean value.
    Bool(bool),
    /// The debug rendering of a value with no dedicated variant.
    Other(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) | FieldValue::Other(s) => f.write_str(s),
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::Uint(v) => write!(f, "{}", v),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Bool(v) => write!(f, "{}", v),
        }
    }
}

/// Represents a single log entry with timestamp, level, message, and fields.
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// The timestamp when the log entry was created.
    pub timestamp: DateTime<Utc>,
    /// The severity of the entry.
    pub level: Severity,
    /// The log message content.
    pub message: String,
    /// Additional fields attached at the call site.
    pub fields: BTreeMap<String, FieldValue>,
}

impl LogEntry {
    /// Creates a new entry stamped with the current time and no fields.
    pub fn new(level: Severity, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Attaches a field to the entry.
    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Resolves the module name from the `module` field.
    ///
    /// A missing field resolves to the empty string; the formatter pads
    /// it out to the configured width like any other short name.
    pub fn module(&self) -> String {
        self.fields
            .get("module")
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}
