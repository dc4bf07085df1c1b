//! User-facing errors with miette diagnostics
//!
//! Wraps the typed module errors into diagnostics with codes and help
//! text at the CLI boundary.

use miette::Diagnostic;
use thiserror::Error;

use crate::diff::DiffError;
use crate::report::LoadError;

/// Top-level error type for the cdiff CLI
#[derive(Debug, Error, Diagnostic)]
pub enum CdiffError {
    /// `--no-console` only makes sense when the document goes somewhere
    #[error("the argument '--no-console' requires an output file with '--output'")]
    #[diagnostic(
        code(cdiff::usage),
        help("Pass '-o <FILE>' to write the report, or drop '--no-console'")
    )]
    NoConsoleWithoutOutput,

    /// One of the two report files could not be loaded
    #[error("failed to load report {path}")]
    #[diagnostic(
        code(cdiff::load),
        help(
            "Check that the file is a readable XLSX export with \
             'Title' and 'Resources and Regions' columns"
        )
    )]
    Load {
        path: String,
        #[source]
        source: LoadError,
    },

    /// Broken contract between the title and resource comparators
    #[error("report comparison failed")]
    #[diagnostic(
        code(cdiff::diff),
        help("This indicates a bug in cdiff, not a problem with the input files")
    )]
    Comparison {
        #[source]
        source: DiffError,
    },
}
