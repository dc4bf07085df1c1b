//! cdiff - Cloudsploit Report Comparison CLI
//!
//! Compares an old and an updated Cloudsploit XLSX export and prints a
//! Markdown document describing added/removed findings and per-finding
//! resource changes.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cdiff::cli::{self, Cli, TerminalConfirm};
use cdiff::errors::CdiffError;
use cdiff::ui::Printer;

fn init_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("cdiff=info"),
            1 => EnvFilter::new("cdiff=debug"),
            2 => EnvFilter::new("cdiff=trace"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Events go to stderr; stdout carries the rendered document
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_logging(args.verbose, args.quiet);

    let printer = Printer::new();
    match cli::run(args, &TerminalConfirm, &printer) {
        Ok(code) => code,
        Err(err) => {
            match err.downcast::<CdiffError>() {
                Ok(diagnosed) => eprintln!("{:?}", miette::Report::new(diagnosed)),
                Err(other) => printer.error(&format!("{other:#}")),
            }
            ExitCode::FAILURE
        }
    }
}
