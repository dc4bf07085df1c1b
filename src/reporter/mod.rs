//! Reporter - Rendering comparison results
//!
//! Pure string formatting; writing the document anywhere is the CLI
//! writer's job.

mod markdown;

pub use markdown::{render, SourceLabel};
