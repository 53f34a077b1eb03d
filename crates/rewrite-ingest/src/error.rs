//! Error types for rule ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a configuration file.
///
/// Parsing itself never fails: lines that are not usable `RewriteRule`
/// directives are skipped.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Config file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Config file exists but could not be read.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::FileNotFound { path } | Self::FileRead { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
