//! # propgen CLI
//!
//! Declarative C# property-class generator.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Process each specification file in argument order.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::{debug, info, instrument};

use propgen_adapters::LocalFilesystem;
use propgen_core::application::GenerateService;

use crate::{
    cli::{Cli, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else — including tracing init.
    // Silently ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    // clap handles --help / --version and exits automatically; errors here
    // are argument-parse failures (exit 2).
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Render clap's own error (already user-friendly) and exit 2.
            eprintln!("{}", e.render().ansi());
            return ExitCode::from(2);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        files = cli.files.len(),
        dry_run = cli.dry_run,
        quiet = cli.global.quiet,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e:#}");
            return ExitCode::from(4);
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Process files + 6. Error handling ──────────────────────────────
    let verbose = cli.global.verbose > 0;
    match run(cli, output) {
        Ok(()) => {
            info!("propgen completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Process every specification file in argument order.
///
/// Every error is fatal: it aborts the current file and the whole run.
/// Earlier completed writes are left in place (no undo).
#[instrument(skip_all)]
fn run(cli: Cli, output: OutputManager) -> CliResult<()> {
    // Zero arguments is not an error: short usage, successful exit.
    if cli.files.is_empty() {
        let mut cmd = Cli::command();
        output.payload(&cmd.render_usage().to_string())?;
        output.payload("Run 'propgen --help' for details.")?;
        return Ok(());
    }

    let service = GenerateService::new(Box::new(LocalFilesystem::new()));
    let mut generated = Vec::new();

    // Human progress lines would corrupt a JSON payload on stdout.
    let human = output.format() != OutputFormat::Json;

    for file in &cli.files {
        let input = std::path::absolute(file)?;

        if cli.dry_run {
            let (spec, source) = service.render(&input)?;
            if human {
                output.info(&format!(
                    "dry run: {} -> {}",
                    spec.class_name,
                    spec.output_path.display()
                ))?;
            }
            output.payload(&source)?;
        } else {
            let summary = service.generate(&input)?;
            if human {
                output.success(&format!(
                    "{} -> {}",
                    summary.class_name,
                    summary.output_path.display()
                ))?;
            }
            generated.push(summary);
        }
    }

    if output.format() == OutputFormat::Json && !cli.dry_run {
        let json = serde_json::to_string_pretty(&generated).map_err(|e| CliError::IoError {
            message: "failed to serialize generation summaries".into(),
            source: std::io::Error::other(e),
        })?;
        output.payload(&json)?;
    }

    Ok(())
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes — the format/suggestion machinery in `CliError`
/// is all exercised here.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    // 1. Emit a structured log event at the right severity.
    err.log();

    // 2. Print a user-friendly message.  We write directly to stderr so the
    //    message appears even when stdout is redirected.
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
