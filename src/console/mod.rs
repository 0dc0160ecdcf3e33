//! This module contains the console output path: the formatting
//! configuration, the entry renderer, and the mutex-guarded stream sink.
pub mod config;
pub mod format;
pub mod sink;

pub use config::ConsoleConfig;
pub use format::format_entry;
pub use sink::{route, ConsoleSink, OutputStream, WriteError};
