//! cctdb CLI - conformance test workbook to SQL converter

use cctdb_cli::cli::Args;
use cctdb_cli::{input, layout, output, schema};

use anyhow::{Context, Result};
use cctdb_core::{convert, ConvertError};
use cctdb_export::{export_sql, ExportError, ScriptOptions};
use clap::Parser;
use std::process::ExitCode;
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The workbook could not be converted (unknown reference, duplicate step, unsafe literal).
const EXIT_FAILURE: u8 = 1;
/// Configuration or IO error (unreadable workbook, bad layout, malformed schema).
const EXIT_CONFIG_ERROR: u8 = 66;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("cctdb: error: {e:#}");
        return ExitCode::from(EXIT_CONFIG_ERROR);
    }

    match run(args) {
        Ok(true) => ExitCode::from(EXIT_FAILURE),
        Ok(false) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("cctdb: error: {e:#}");
            ExitCode::from(EXIT_CONFIG_ERROR)
        }
    }
}

/// Install the stderr subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::ERROR,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

/// Convert the workbook and write the script.
///
/// Returns `Ok(true)` when the workbook itself cannot be converted; nothing is
/// written in that case. Configuration and IO problems are returned as errors.
fn run(args: Args) -> Result<bool> {
    let schema = schema::load_schema(args.schema.as_deref())?;
    let options = layout::load_options(&args)?;
    let workbook = input::read_workbook(&args.input)?;

    let conversion = match convert(&workbook, &options) {
        Ok(conversion) => conversion,
        Err(ConvertError::Layout(e)) => {
            return Err(e).with_context(|| {
                format!("Failed to resolve sheets in {}", args.input.display())
            });
        }
        Err(e) => {
            eprintln!("cctdb: error: {e}");
            return Ok(true);
        }
    };

    if !args.quiet {
        output::print_issues_to_stderr(&conversion.issues);
    }

    let script_options = ScriptOptions {
        header: args.header,
    };
    let script = match export_sql(&conversion.dataset, &schema, &script_options) {
        Ok(script) => script,
        Err(e @ ExportError::UnsafeLiteral { .. }) => {
            eprintln!("cctdb: error: {e}");
            return Ok(true);
        }
        Err(e) => return Err(e.into()),
    };

    output::write_output(&args.output, &script)?;

    let summary = &conversion.summary;
    info!(
        steps = summary.step_count,
        parameters = summary.parameter_count,
        cases = summary.case_count,
        links = summary.link_count,
        warnings = summary.issue_count.warnings,
        "wrote script"
    );

    Ok(false)
}
