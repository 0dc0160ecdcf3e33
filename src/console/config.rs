//! This module defines the console output configuration.
use crossterm::tty::IsTty;

/// Configuration for console formatting, fixed at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Whether ANSI color codes may be emitted.
    pub color: bool,
    /// The fixed display width of the bracketed module field.
    pub module_width: usize,
}

impl ConsoleConfig {
    /// The module field width used when none is given.
    pub const DEFAULT_MODULE_WIDTH: usize = 8;

    /// Creates a configuration with explicit settings.
    pub fn new(color: bool, module_width: usize) -> Self {
        Self {
            color,
            module_width,
        }
    }

    /// Creates a configuration with color decided by terminal capability.
    ///
    /// Color is enabled only when both stdout and stderr are terminals,
    /// since entries are split across the two streams.
    pub fn detect(module_width: usize) -> Self {
        let color = std::io::stdout().is_tty() && std::io::stderr().is_tty();
        Self {
            color,
            module_width,
        }
    }
}

impl Default for ConsoleConfig {
    /// Equivalent to `ConsoleConfig::detect(DEFAULT_MODULE_WIDTH)`.
    fn default() -> Self {
        Self::detect(Self::DEFAULT_MODULE_WIDTH)
    }
}
