use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use rewrite_cli::report::{ReportFormat, ReportOptions, write_json, write_outcome};
use rewrite_cli::summary::print_summary;
use rewrite_model::FileOutcome;
use rewrite_validate::{validate_files, validate_path};

#[derive(Debug)]
pub struct RunResult {
    pub outcomes: Vec<FileOutcome>,
}

impl RunResult {
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(FileOutcome::is_success)
    }
}

/// Validate every file and report each verdict as soon as it is known.
pub fn run_validate(files: &[PathBuf], options: &ReportOptions) -> Result<RunResult> {
    let start = Instant::now();
    let outcomes = match options.format {
        ReportFormat::Text => {
            let mut outcomes = Vec::with_capacity(files.len());
            for path in files {
                let outcome = validate_path(path);
                write_outcome(
                    &outcome,
                    options,
                    &mut io::stdout().lock(),
                    &mut io::stderr().lock(),
                )
                .with_context(|| format!("write report for {}", path.display()))?;
                outcomes.push(outcome);
            }
            if options.summary {
                print_summary(&outcomes);
            }
            outcomes
        }
        ReportFormat::Json => {
            let outcomes = validate_files(files);
            write_json(&outcomes, &mut io::stdout().lock())?;
            outcomes
        }
    };

    let result = RunResult { outcomes };
    info!(
        file_count = files.len(),
        failed = result.outcomes.iter().filter(|o| !o.is_success()).count(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );
    Ok(result)
}
