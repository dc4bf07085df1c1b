//! File-order confirmation - Guard against swapped arguments
//!
//! The comparison labels differences as "added"/"removed" assuming the
//! first file is the older one. When modification times say otherwise,
//! the user gets to continue, swap, or bail out. The capability is a
//! trait so the flow stays testable without a terminal.

use std::path::Path;

use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Select};
use tracing::warn;

use crate::ui::{OutputMode, Printer};

/// Outcome of the file-order confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDecision {
    /// Keep the order as given
    Continue,
    /// Swap old and new before comparing
    Swap,
    /// Abort the run cleanly
    Exit,
}

/// Capability for resolving a suspicious file ordering
pub trait Confirm {
    fn resolve_order(&self, old: &Path, new: &Path) -> Result<OrderDecision>;
}

/// Terminal implementation backed by dialoguer
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn resolve_order(&self, old: &Path, new: &Path) -> Result<OrderDecision> {
        let printer = Printer::new();
        printer.warning("Second file should be newer.");

        if OutputMode::detect() != OutputMode::Interactive {
            // Nobody to ask; accept the order as given
            warn!(
                "{} is newer than {}; continuing without confirmation",
                old.display(),
                new.display()
            );
            return Ok(OrderDecision::Continue);
        }

        let choices = ["I know. Continue.", "Swap the order", "Exit"];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "{} was modified after {}",
                old.display(),
                new.display()
            ))
            .items(&choices)
            .default(0)
            .interact()
            .context("file-order confirmation cancelled")?;

        Ok(match selection {
            0 => OrderDecision::Continue,
            1 => OrderDecision::Swap,
            _ => OrderDecision::Exit,
        })
    }
}
