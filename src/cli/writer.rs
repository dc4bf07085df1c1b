//! Document Writer - Console echo and optional file persistence
//!
//! Console output comes first so a file-system problem cannot take the
//! result down with it; a failed file write degrades to a warning.

use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::ui::Printer;

/// Writes the rendered document to its destinations
#[derive(Debug)]
pub struct DocumentWriter {
    output: Option<PathBuf>,
    console: bool,
}

impl DocumentWriter {
    pub fn new(output: Option<PathBuf>, console: bool) -> Self {
        Self { output, console }
    }

    /// Echo to stdout (unless suppressed), then persist if requested
    pub fn write(&self, document: &str, printer: &Printer) {
        if self.console {
            printer.print(document);
        }

        if let Some(path) = &self.output {
            match fs::write(path, document) {
                Ok(()) => info!("report written to {}", path.display()),
                Err(err) => {
                    warn!("cannot write report to {}: {}", path.display(), err);
                    printer.warning(&format!("Cannot write to file {}", path.display()));
                }
            }
        }
    }
}
