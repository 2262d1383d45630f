//! Builder methods for creating errors with context

use super::types::Error;
use std::path::PathBuf;

impl Error {
    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn environment_not_found(environment: impl Into<String>) -> Self {
        Error::EnvironmentNotFound {
            environment: environment.into(),
        }
    }

    #[must_use]
    pub fn unknown_storage_type(storage_type: impl Into<String>) -> Self {
        Error::UnknownStorageType {
            storage_type: storage_type.into(),
        }
    }

    /// Create a key-not-found error carrying the unsplit candidate text
    #[must_use]
    pub fn key_not_found(reference: impl Into<String>) -> Self {
        Error::KeyNotFound {
            reference: reference.into(),
        }
    }

    #[must_use]
    pub fn cyclic_reference(chain: Vec<String>) -> Self {
        Error::CyclicReference { chain }
    }

    #[must_use]
    pub fn reference_depth_exceeded(key: impl Into<String>, max_depth: usize) -> Self {
        Error::ReferenceDepthExceeded {
            key: key.into(),
            max_depth,
        }
    }

    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a backend error without an underlying source
    #[must_use]
    pub fn backend(
        backend: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Error::Backend {
            backend: backend.into(),
            key: key.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a backend error wrapping the store's own error
    #[must_use]
    pub fn backend_with_source(
        backend: impl Into<String>,
        key: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let source = source.into();
        Error::Backend {
            backend: backend.into(),
            key: key.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Create an environment variable error
    #[must_use]
    pub fn environment(variable: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Environment {
            variable: variable.into(),
            message: message.into(),
        }
    }

    /// Whether this error came from a placeholder that could not be resolved
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound { .. })
    }
}
