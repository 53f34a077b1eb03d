use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use rewrite_model::Rule;

use crate::error::{IngestError, Result};
use crate::extract::extract_rules;

/// Read a config file and extract its rules.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_rules(path: &Path) -> Result<Vec<Rule>> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => IngestError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read config file");
    let text = String::from_utf8_lossy(&bytes);
    Ok(extract_rules(&text))
}
