//! Configuration loader for secret-env
//!
//! Locates the YAML document relative to a working directory and parses it.

use crate::config::SecretEnvConfig;
use secret_env_core::{constants::DEFAULT_CONFIG_PATH, Error, Result};
use std::path::{Path, PathBuf};

/// Loader for the configuration document
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    /// Explicit document path; relative paths resolve against `directory`
    path: Option<PathBuf>,
    /// Directory to resolve relative paths from (defaults to current directory)
    directory: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration file path
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the directory to resolve relative paths from
    pub fn directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.directory = Some(dir.into());
        self
    }

    /// Working directory used for relative paths
    pub fn working_dir(&self) -> Result<PathBuf> {
        match &self.directory {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir()
                .map_err(|e| Error::file_system(".", "determine working directory", e)),
        }
    }

    /// Absolute path of the document this loader will read
    pub fn config_path(&self) -> Result<PathBuf> {
        let path = self
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        Ok(resolve_relative(&self.working_dir()?, &path))
    }

    /// Load the configuration
    pub fn load(&self) -> Result<SecretEnvConfig> {
        let path = self.config_path()?;
        if !path.is_file() {
            return Err(Error::configuration(format!(
                "configuration file '{}' does not exist",
                path.display()
            )));
        }

        tracing::debug!(path = %path.display(), "Loading secret-env configuration");
        SecretEnvConfig::from_path(&path)
    }
}

/// Join `path` onto `base` unless it is already absolute
pub fn resolve_relative(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
