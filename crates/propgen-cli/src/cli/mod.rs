//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// propgen takes specification files as positional arguments; there are no
/// subcommands.  Invoking with no files prints a short usage message and
/// exits successfully (handled in `main`, not by clap).
#[derive(Debug, Parser)]
#[command(
    name    = "propgen",
    bin_name = "propgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate C# property classes from declarative spec files",
    long_about = "propgen reads declarative specification files (namespace, class \
                  name, properties, optional capabilities, output location) and \
                  emits complete C# class source for each one.",
    after_help = "EXAMPLES:\n\
        \x20 propgen widget.propspec\n\
        \x20 propgen models/*.propspec\n\
        \x20 propgen --dry-run widget.propspec\n\
        \x20 propgen --output-format json widget.propspec"
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Specification files to process, in order.
    #[arg(value_name = "FILE", help = "Specification files to process")]
    pub files: Vec<PathBuf>,

    /// Print generated source to stdout instead of writing output files.
    #[arg(long = "dry-run", help = "Show generated source without writing")]
    pub dry_run: bool,
}

// ── tests ─────────────────────────────────────────────────────────────────────
