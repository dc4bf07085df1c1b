//! User interface components for the cdiff CLI
//!
//! Provides output-mode detection (interactive, CI, piped) and a
//! centralized printer so status lines stay off stdout, which is
//! reserved for the rendered document.

pub mod output;

pub use output::{OutputMode, Printer};
