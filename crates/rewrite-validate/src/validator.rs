use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, info_span};

use rewrite_ingest::{IngestError, read_rules};
use rewrite_model::{FileOutcome, FileStatus};

use crate::collision::{CollisionError, check_rules};

/// Why a file failed validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The file could not be read; no rules were checked.
    #[error(transparent)]
    FileAccess(#[from] IngestError),

    /// The file was read and contains colliding rules.
    #[error(transparent)]
    Collision(#[from] CollisionError),
}

/// Read, extract and check a single file. Returns the extracted rule count.
pub fn validate_file(path: &Path) -> Result<usize, ValidationError> {
    let span = info_span!("validate", path = %path.display());
    let _guard = span.enter();

    let rules = read_rules(path)?;
    check_rules(&rules)?;
    debug!(rule_count = rules.len(), "no collisions");
    Ok(rules.len())
}

/// Validate a single file and fold the result into a [`FileOutcome`].
pub fn validate_path(path: &Path) -> FileOutcome {
    let status = match validate_file(path) {
        Ok(rule_count) => FileStatus::Passed { rule_count },
        Err(ValidationError::Collision(error)) => FileStatus::Collisions {
            rule_count: error.rule_count,
            reports: error.reports,
        },
        Err(ValidationError::FileAccess(error)) => FileStatus::Unreadable {
            message: error.to_string(),
        },
    };
    info!(
        path = %path.display(),
        passed = matches!(status, FileStatus::Passed { .. }),
        "validation complete"
    );
    FileOutcome::new(path, status)
}

/// Validate each path independently, in the given order.
///
/// A file that cannot be read or has collisions does not stop the others.
pub fn validate_files<P: AsRef<Path>>(paths: &[P]) -> Vec<FileOutcome> {
    paths
        .iter()
        .map(|path| validate_path(path.as_ref()))
        .collect()
}
