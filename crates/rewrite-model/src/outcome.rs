use std::path::PathBuf;

use serde::Serialize;

use crate::collision::CollisionReport;

/// Result of validating one file, as handed to the reporting layer.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    Passed {
        rule_count: usize,
    },
    Collisions {
        rule_count: usize,
        reports: Vec<CollisionReport>,
    },
    Unreadable {
        message: String,
    },
}

impl FileOutcome {
    pub fn new(path: impl Into<PathBuf>, status: FileStatus) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, FileStatus::Passed { .. })
    }

    pub fn collision_count(&self) -> usize {
        match &self.status {
            FileStatus::Collisions { reports, .. } => reports.len(),
            _ => 0,
        }
    }

    /// Number of extracted rules, or `None` when the file could not be read.
    pub fn rule_count(&self) -> Option<usize> {
        match &self.status {
            FileStatus::Passed { rule_count } | FileStatus::Collisions { rule_count, .. } => {
                Some(*rule_count)
            }
            FileStatus::Unreadable { .. } => None,
        }
    }
}
