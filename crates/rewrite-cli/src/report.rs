//! Per-file report rendering.
//!
//! Text output keeps verdicts on stdout and failure headlines on stderr, so
//! `validate-rewrites a.conf 2>/dev/null` lists only the colliding pairs.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use rewrite_model::{CollisionReport, FileOutcome, FileStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub format: ReportFormat,
    /// Print a summary table after the text report.
    pub summary: bool,
    /// Apply ANSI styling to the text report.
    pub color: bool,
}

/// Write one file's verdict in text form.
pub fn write_outcome<O, E>(
    outcome: &FileOutcome,
    options: &ReportOptions,
    out: &mut O,
    err: &mut E,
) -> io::Result<()>
where
    O: Write,
    E: Write,
{
    let path = outcome.path.display();
    match &outcome.status {
        FileStatus::Passed { .. } => {
            writeln!(out, "{path}: {}", paint_ok("OK", options.color))?;
        }
        FileStatus::Collisions { reports, .. } => {
            writeln!(
                err,
                "{} {} in {path}",
                paint_failed("Failed rules:", options.color),
                reports.len()
            )?;
            for report in reports {
                writeln!(out, "{}", collision_line(report, options.color))?;
            }
        }
        FileStatus::Unreadable { message } => {
            writeln!(err, "{message}")?;
        }
    }
    Ok(())
}

/// `Redirect <line>:<source> overrides <line>:<source>`
pub fn collision_line(report: &CollisionReport, color: bool) -> String {
    format!(
        "Redirect {}:{} overrides {}:{}",
        report.overridden.index(),
        paint_bold(report.overridden.source(), color),
        report.overrider.index(),
        paint_bold(report.overrider.source(), color),
    )
}

/// Write every outcome as one pretty-printed JSON array.
pub fn write_json<W: Write>(outcomes: &[FileOutcome], out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, outcomes).context("serialize report")?;
    writeln!(out).context("write report")?;
    Ok(())
}

fn paint_ok(text: &str, color: bool) -> String {
    if color {
        text.green().to_string()
    } else {
        text.to_string()
    }
}

fn paint_failed(text: &str, color: bool) -> String {
    if color {
        text.red().to_string()
    } else {
        text.to_string()
    }
}

fn paint_bold(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}
