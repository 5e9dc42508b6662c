use std::path::{Path, PathBuf};

use crate::schema::PolicyConfig;

/// Errors that can occur while reading a policy file.
///
/// These are strictly syntactic: a file that parses but contains unusable
/// rules loads fine, and the problems surface later as validator
/// diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PolicyLoadError {
    #[error("failed to read policy file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse policy: {0}")]
    Parse(#[from] serde_yml::Error),
}

/// Load a [`PolicyConfig`] from a YAML file on disk.
pub fn load_policy(path: impl AsRef<Path>) -> Result<PolicyConfig, PolicyLoadError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| PolicyLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_policy_from_str(&contents)
}

/// Parse a [`PolicyConfig`] from a YAML string.
pub fn load_policy_from_str(yaml: &str) -> Result<PolicyConfig, PolicyLoadError> {
    Ok(serde_yml::from_str(yaml)?)
}
