//! Core error type definitions

use std::path::PathBuf;

/// Result type alias for secret-env operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for secret-env operations.
///
/// Every variant is fatal for a load: nothing is retried and the first error
/// aborts the remaining batch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed configuration or storage descriptor
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// The configuration has no section for the requested environment
    #[error("environment '{environment}' is not defined in the configuration")]
    EnvironmentNotFound { environment: String },

    /// A storage descriptor named a backend type that does not exist
    #[error("Unknown storage type: {storage_type}")]
    UnknownStorageType { storage_type: String },

    /// Every candidate of a placeholder's fallback chain was absent
    #[error("secret key not found: '{reference}'")]
    KeyNotFound { reference: String },

    /// A sibling reference chain loops back onto a key already being resolved
    #[error("cyclic reference detected: {}", .chain.join(" -> "))]
    CyclicReference { chain: Vec<String> },

    /// A sibling reference chain is deeper than the resolver allows
    #[error("reference chain for '{key}' exceeds the maximum depth of {max_depth}")]
    ReferenceDepthExceeded { key: String, max_depth: usize },

    /// File system operations
    #[error("file system {operation} operation failed for '{}': {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// YAML deserialization errors
    #[error("YAML error: {message}")]
    Yaml {
        message: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// A storage backend failed while looking up a key
    #[error("{backend} storage failed to retrieve '{key}': {message}")]
    Backend {
        backend: String,
        key: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Environment variable related errors
    #[error("environment variable '{variable}' error: {message}")]
    Environment { variable: String, message: String },
}
