//! Console formatting and routing for structured log entries.
//!
//! An entry carries a timestamp, a severity, a message, and the fields
//! attached at the call site; the console line layout is
//! `<timestamp> [<module>] <LEVL>  <message>` with the module name
//! right-aligned in a fixed-width bracketed field and the four-character
//! level abbreviation colorized by severity. Warnings and worse route to
//! stderr, everything else to stdout, and a single lock serializes all
//! writes so concurrent entries never tear each other's lines.
//!
//! The [`collector`] module plugs the sink into `tracing` as a layer;
//! [`ConsoleSink::emit`] stays directly callable for entries built by
//! hand.
pub mod collector;
pub mod console;
pub mod entry;
pub mod severity;

pub use collector::ConsoleCollector;
pub use console::{format_entry, route, ConsoleConfig, ConsoleSink, OutputStream, WriteError};
pub use entry::{FieldValue, LogEntry};
pub use severity::Severity;
