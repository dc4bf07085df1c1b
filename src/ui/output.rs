//! Output abstraction layer for consistent CLI output
//!
//! Detects the output mode (interactive, CI, plain) and centralizes
//! print functions that respect it. The rendered document goes to
//! stdout; diagnostics go to stderr so piped output stays clean.

use std::io::{self, IsTerminal, Write};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Interactive terminal with colors and prompts
    Interactive,
    /// CI environment - plain text, no colors
    CI,
    /// Piped output - plain text, no colors
    Plain,
}

impl OutputMode {
    /// Detect the appropriate output mode based on environment
    pub fn detect() -> Self {
        if is_ci::cached() {
            return OutputMode::CI;
        }

        if io::stdout().is_terminal() {
            OutputMode::Interactive
        } else {
            OutputMode::Plain
        }
    }

    /// Whether colors should be used
    pub fn colors_enabled(&self) -> bool {
        matches!(self, OutputMode::Interactive)
    }
}

impl Default for OutputMode {
    fn default() -> Self {
        Self::detect()
    }
}

/// Centralized printer that respects output mode
#[derive(Debug, Clone)]
pub struct Printer {
    mode: OutputMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    /// Create a new printer with auto-detected mode
    pub fn new() -> Self {
        Self {
            mode: OutputMode::detect(),
        }
    }

    /// Create a printer with a specific mode
    pub fn with_mode(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Get the current output mode
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Print to stdout without appending a newline
    pub fn print(&self, message: &str) {
        print!("{}", message);
        let _ = io::stdout().flush();
    }

    /// Print a warning message to stderr
    pub fn warning(&self, message: &str) {
        use colored::Colorize;
        if self.mode.colors_enabled() {
            eprintln!("{} {}", "[WARNING]".yellow(), message.yellow());
        } else {
            eprintln!("[WARNING] {}", message);
        }
    }

    /// Print an error message to stderr
    pub fn error(&self, message: &str) {
        use colored::Colorize;
        if self.mode.colors_enabled() {
            eprintln!("{} {}", "[ERROR]".red(), message.red());
        } else {
            eprintln!("[ERROR] {}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_disables_colors() {
        assert!(!OutputMode::Plain.colors_enabled());
        assert!(!OutputMode::CI.colors_enabled());
        assert!(OutputMode::Interactive.colors_enabled());
    }

    #[test]
    fn printer_keeps_its_mode() {
        let printer = Printer::with_mode(OutputMode::Plain);
        assert_eq!(printer.mode(), OutputMode::Plain);
    }
}
