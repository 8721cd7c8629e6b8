//! Script destinations and stderr diagnostics.

use anyhow::{Context, Result};
use cctdb_core::{Issue, Severity};
use cctdb_export::write_script_atomically;
use std::io::{self, Write};
use std::path::PathBuf;

/// Write the script to `path`, or to stdout when no path is given.
///
/// Files are replaced atomically, so an interrupted run leaves any previous
/// script in place.
pub fn write_output(path: &Option<PathBuf>, content: &str) -> Result<()> {
    if let Some(path) = path {
        write_script_atomically(path, content)
            .with_context(|| format!("Failed to write to {}", path.display()))?;
    } else {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|()| stdout.flush())
            .context("Failed to write to stdout")?;
    }
    Ok(())
}

/// Format one issue as a `cctdb: <level>: ...` diagnostic line.
pub fn format_issue(issue: &Issue) -> String {
    let level = match issue.severity {
        Severity::Warning => "warning",
        Severity::Info => "info",
    };

    let location = issue
        .location
        .as_ref()
        .map(|loc| format!(" ({loc})"))
        .unwrap_or_default();

    format!("cctdb: {level}:{location} [{}] {}", issue.code, issue.message)
}

pub fn print_issues_to_stderr(issues: &[Issue]) {
    for issue in issues {
        eprintln!("{}", format_issue(issue));
    }
}
