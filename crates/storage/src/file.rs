//! Local `key=value` secrets file.

use crate::backend::{full_key, Storage};
use secret_env_core::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Backend serving secrets from a local file read once at construction
#[derive(Debug, Clone)]
pub struct FileStorage {
    namespace: String,
    path: Option<PathBuf>,
    secrets: HashMap<String, String>,
}

impl FileStorage {
    /// Read and parse `path`
    pub fn open(path: impl AsRef<Path>, namespace: impl Into<String>) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| Error::file_system(path, "read", e))?;

        let storage = Self {
            namespace: namespace.into(),
            path: Some(path.to_path_buf()),
            secrets: parse_secrets(&contents),
        };
        tracing::debug!(
            path = %path.display(),
            entries = storage.secrets.len(),
            "Loaded secrets file"
        );
        Ok(storage)
    }

    /// Build from already-read file contents
    pub fn from_contents(contents: &str, namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            path: None,
            secrets: parse_secrets(contents),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }
}

impl Storage for FileStorage {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn retrieve(&self, secret_key: &str) -> Result<Option<String>> {
        Ok(self
            .secrets
            .get(&full_key(&self.namespace, secret_key))
            .cloned())
    }
}

/// Split each line on its first `=` and trim both halves. Blank lines,
/// `#` comments and lines without `=` carry no entry; later keys win.
fn parse_secrets(contents: &str) -> HashMap<String, String> {
    let mut secrets = HashMap::new();

    for (index, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match trimmed.split_once('=') {
            Some((key, value)) => {
                secrets.insert(key.trim().to_string(), value.trim().to_string());
            }
            None => {
                // Never log the line itself, it may be a secret
                tracing::warn!(line = index + 1, "Ignoring secrets file line without '='");
            }
        }
    }

    secrets
}
