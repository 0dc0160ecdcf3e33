//! This module renders log entries into console lines.
use super::ConsoleConfig;
use crate::entry::LogEntry;
use crate::severity::Severity;

// ANSI foreground color codes.
const RED: u8 = 31;
const YELLOW: u8 = 33;
const BLUE: u8 = 34;
const GRAY: u8 = 37;

/// Timestamp layout: ISO-8601 date and time with millisecond precision.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Selects the display color for a severity.
fn level_color(level: Severity) -> u8 {
    match level {
        Severity::Debug => GRAY,
        Severity::Warn => YELLOW,
        Severity::Error | Severity::Fatal | Severity::Panic => RED,
        _ => BLUE,
    }
}

/// Fits a module name into exactly `width` characters.
///
/// Longer names keep their first `width` characters, shorter names are
/// right-aligned with spaces.
fn fit_module(name: &str, width: usize) -> String {
    if name.chars().count() > width {
        name.chars().take(width).collect()
    } else {
        format!("{name:>width$}")
    }
}

/// Renders a log entry as a single newline-terminated console line.
///
/// The layout is `<timestamp> [<module>] <LEVL>  <message>\n`, with the
/// level abbreviation wrapped in an ANSI color pair when `config.color`
/// is set. This is a pure function: the same entry and configuration
/// always produce identical bytes.
pub fn format_entry(entry: &LogEntry, config: &ConsoleConfig) -> String {
    let timestamp = entry.timestamp.format(TIMESTAMP_FORMAT);
    let module = fit_module(&entry.module(), config.module_width);
    let abbrev = entry.level.abbrev();
    let level = if config.color {
        format!("\x1b[{}m{}\x1b[0m", level_color(entry.level), abbrev)
    } else {
        abbrev
    };
    format!("{} [{}] {}  {}\n", timestamp, module, level, entry.message)
}
