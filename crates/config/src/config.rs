//! Configuration document types.
//!
//! The document maps an environment name to a section:
//!
//! ```yaml
//! production:
//!   storage:
//!     type: remote
//!     namespace: myapp.
//!   env:
//!     DATABASE_URL: "postgres://app:#{db_password}@db/app"
//!     PORT: 80
//! ```
//!
//! Scalar values are coerced to strings when the document is parsed, so
//! everything downstream only deals with raw string templates.

use indexmap::IndexMap;
use secret_env_core::{Error, Result};
use serde::Deserialize;
use serde_yaml::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Known storage backend kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    Plain,
    File,
    Remote,
}

impl StorageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageType::Plain => "plain",
            StorageType::File => "file",
            StorageType::Remote => "remote",
        }
    }
}

impl FromStr for StorageType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "plain" => Ok(StorageType::Plain),
            "file" => Ok(StorageType::File),
            "remote" => Ok(StorageType::Remote),
            other => Err(Error::unknown_storage_type(other)),
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `storage` block of an environment section.
///
/// `type` is kept as written so an unknown value surfaces from the storage
/// factory with the offending name rather than as a YAML error.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StorageDescriptor {
    #[serde(rename = "type")]
    pub storage_type: String,

    #[serde(default)]
    pub namespace: Option<String>,

    /// Secrets file for the `file` backend
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Keyring service for the `remote` backend
    #[serde(default)]
    pub service: Option<String>,
}

impl StorageDescriptor {
    pub fn new(storage_type: impl Into<String>) -> Self {
        Self {
            storage_type: storage_type.into(),
            namespace: None,
            path: None,
            service: None,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn kind(&self) -> Result<StorageType> {
        self.storage_type.parse()
    }

    /// Namespace prefix, empty when not configured
    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawSection {
    #[serde(default)]
    storage: Option<StorageDescriptor>,
    #[serde(default)]
    env: Option<IndexMap<String, Value>>,
}

/// One environment's storage descriptor and variable templates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentSection {
    pub storage: Option<StorageDescriptor>,
    /// Raw templates in declared order
    pub env: IndexMap<String, String>,
}

impl EnvironmentSection {
    fn from_raw(environment: &str, raw: RawSection) -> Result<Self> {
        let mut env = IndexMap::new();
        for (key, value) in raw.env.unwrap_or_default() {
            let coerced = coerce_scalar(&value).ok_or_else(|| {
                Error::configuration(format!(
                    "variable '{key}' in environment '{environment}' must be a scalar value"
                ))
            })?;
            env.insert(key, coerced);
        }

        Ok(Self {
            storage: raw.storage,
            env,
        })
    }
}

/// Render a YAML scalar the way it would read in a shell; `None` for
/// sequences and mappings.
fn coerce_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Tagged(tagged) => coerce_scalar(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// The whole configuration document, keyed by environment name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretEnvConfig {
    environments: IndexMap<String, EnvironmentSection>,
}

impl SecretEnvConfig {
    /// Parse a YAML document
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let raw: Option<IndexMap<String, Option<RawSection>>> = serde_yaml::from_str(source)?;

        let mut environments = IndexMap::new();
        for (name, section) in raw.unwrap_or_default() {
            let section = EnvironmentSection::from_raw(&name, section.unwrap_or_default())?;
            environments.insert(name, section);
        }

        Ok(Self { environments })
    }

    /// Read and parse a YAML file
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| Error::file_system(path, "read", e))?;
        Self::from_yaml_str(&source)
    }

    pub fn environment(&self, name: &str) -> Option<&EnvironmentSection> {
        self.environments.get(name)
    }

    /// Section for `name`, or `EnvironmentNotFound`
    pub fn require_environment(&self, name: &str) -> Result<&EnvironmentSection> {
        self.environment(name)
            .ok_or_else(|| Error::environment_not_found(name))
    }

    pub fn has_environment(&self, name: &str) -> bool {
        self.environments.contains_key(name)
    }

    pub fn environment_names(&self) -> impl Iterator<Item = &str> {
        self.environments.keys().map(String::as_str)
    }
}
