use crate::file::FileStorage;
use crate::remote::RemoteStorage;
use secret_env_config::StorageType;
use secret_env_core::Result;

/// Lookup key for `secret_key` inside `namespace`, concatenated verbatim
pub fn full_key(namespace: &str, secret_key: &str) -> String {
    format!("{namespace}{secret_key}")
}

/// Capability shared by every backend
pub trait Storage {
    /// Prefix prepended to every lookup
    fn namespace(&self) -> &str;

    /// Secret stored under `namespace + secret_key`, `None` when absent
    fn retrieve(&self, secret_key: &str) -> Result<Option<String>>;
}

/// Backend that never resolves: it hands back the placeholder it was asked
/// about, namespace included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainStorage {
    namespace: String,
}

impl PlainStorage {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl Storage for PlainStorage {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn retrieve(&self, secret_key: &str) -> Result<Option<String>> {
        Ok(Some(format!("#{{{}}}", full_key(&self.namespace, secret_key))))
    }
}

/// The backend selected for one load
#[derive(Debug)]
pub enum StorageBackend {
    Plain(PlainStorage),
    File(FileStorage),
    Remote(RemoteStorage),
}

impl StorageBackend {
    pub fn kind(&self) -> StorageType {
        match self {
            StorageBackend::Plain(_) => StorageType::Plain,
            StorageBackend::File(_) => StorageType::File,
            StorageBackend::Remote(_) => StorageType::Remote,
        }
    }

    fn inner(&self) -> &dyn Storage {
        match self {
            StorageBackend::Plain(storage) => storage,
            StorageBackend::File(storage) => storage,
            StorageBackend::Remote(storage) => storage,
        }
    }
}

impl Default for StorageBackend {
    fn default() -> Self {
        StorageBackend::Plain(PlainStorage::default())
    }
}

impl Storage for StorageBackend {
    fn namespace(&self) -> &str {
        self.inner().namespace()
    }

    fn retrieve(&self, secret_key: &str) -> Result<Option<String>> {
        let value = self.inner().retrieve(secret_key)?;
        tracing::trace!(
            backend = %self.kind(),
            key = %full_key(self.namespace(), secret_key),
            found = value.is_some(),
            "Storage lookup"
        );
        Ok(value)
    }
}

impl From<PlainStorage> for StorageBackend {
    fn from(storage: PlainStorage) -> Self {
        StorageBackend::Plain(storage)
    }
}

impl From<FileStorage> for StorageBackend {
    fn from(storage: FileStorage) -> Self {
        StorageBackend::File(storage)
    }
}

impl From<RemoteStorage> for StorageBackend {
    fn from(storage: RemoteStorage) -> Self {
        StorageBackend::Remote(storage)
    }
}
