//! This module owns the shared console streams and routes entries to them.
use super::{format_entry, ConsoleConfig};
use crate::entry::LogEntry;
use crate::severity::Severity;
use std::io::{self, Write};
use std::sync::Mutex;
use thiserror::Error;

/// Error returned when a console write does not complete.
#[derive(Debug, Error)]
#[error("failed to write to log")]
pub struct WriteError {
    /// The underlying stream error.
    #[source]
    pub source: io::Error,
}

/// The destination stream for a formatted entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    /// The process standard output stream.
    Stdout,
    /// The process standard error stream.
    Stderr,
}

/// Selects the destination stream for a severity.
///
/// Warnings and worse forward to stderr, all others to stdout. The
/// mapping is total over the severity scale.
pub fn route(level: Severity) -> OutputStream {
    if level >= Severity::Warn {
        OutputStream::Stderr
    } else {
        OutputStream::Stdout
    }
}

/// The stream pair guarded by the sink lock.
struct Streams {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
}

/// A console sink that formats entries and writes them to a stream pair.
///
/// The two streams are shared, order-sensitive resources, so a single
/// mutex serializes every write across all concurrent `emit` calls.
pub struct ConsoleSink {
    config: ConsoleConfig,
    streams: Mutex<Streams>,
}

impl ConsoleSink {
    /// Creates a sink over the process stdout and stderr streams.
    pub fn stdio(config: ConsoleConfig) -> Self {
        Self::with_streams(config, Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Creates a sink over arbitrary stream handles.
    ///
    /// # Arguments
    ///
    /// * `config` - The formatting configuration.
    /// * `out` - The stream receiving informational entries.
    /// * `err` - The stream receiving warnings and worse.
    pub fn with_streams(
        config: ConsoleConfig,
        out: Box<dyn Write + Send>,
        err: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            config,
            streams: Mutex::new(Streams { out, err }),
        }
    }

    /// Returns the sink configuration.
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Formats an entry and writes it to the routed stream.
    ///
    /// Formatting happens outside the critical section; the lock covers
    /// only the write, so concurrent emits contend on stream access alone
    /// and lines never interleave mid-line.
    ///
    /// # Errors
    ///
    /// Returns a [`WriteError`] if the stream rejects the bytes. The
    /// write is not retried.
    pub fn emit(&self, entry: &LogEntry) -> Result<(), WriteError> {
        let line = format_entry(entry, &self.config);

        let mut streams = self.streams.lock().unwrap();
        let stream = match route(entry.level) {
            OutputStream::Stdout => &mut streams.out,
            OutputStream::Stderr => &mut streams.err,
        };
        stream
            .write_all(line.as_bytes())
            .and_then(|()| stream.flush())
            .map_err(|source| WriteError { source })
    }
}
