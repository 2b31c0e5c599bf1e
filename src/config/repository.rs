//! Repository configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ConfigValidationError;

/// Where cycle records are read from
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RepositoryConfig {
    /// Snapshot file (.json, .yaml or .yml); the CLI `--snapshot` flag wins
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
}

impl RepositoryConfig {
    /// Validate repository configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let Some(path) = &self.snapshot_path else {
            return Ok(());
        };
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("json" | "yaml" | "yml") => Ok(()),
            _ => Err(ConfigValidationError::InvalidSnapshotPath),
        }
    }
}
