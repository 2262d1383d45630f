//! Factory for creating storage backends

use crate::backend::{PlainStorage, StorageBackend};
use crate::file::FileStorage;
use crate::remote::{CredentialStore, KeyringStore, RemoteStorage};
use secret_env_config::{loader::resolve_relative, StorageDescriptor, StorageType};
use secret_env_core::{constants::DEFAULT_SECRETS_FILE_PATH, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Builds the backend described by an environment's `storage` block
#[derive(Clone, Default)]
pub struct StorageFactory {
    /// Directory relative secrets-file paths resolve against
    base_dir: Option<PathBuf>,
    /// Store for the remote backend; the OS keyring when unset
    remote_store: Option<Arc<dyn CredentialStore>>,
}

impl StorageFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Use `store` for every remote backend this factory builds
    pub fn remote_store(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.remote_store = Some(store);
        self
    }

    /// Build a backend; an absent descriptor means plain storage with no
    /// namespace. Unknown types fail with `UnknownStorageType`.
    pub fn setup(&self, descriptor: Option<&StorageDescriptor>) -> Result<StorageBackend> {
        let Some(descriptor) = descriptor else {
            return Ok(PlainStorage::default().into());
        };

        let kind = descriptor.kind()?;
        let namespace = descriptor.namespace();
        tracing::debug!(storage_type = %kind, namespace = %namespace, "Setting up storage");

        let backend = match kind {
            StorageType::Plain => PlainStorage::new(namespace).into(),
            StorageType::File => {
                let path = self.secrets_file_path(descriptor.path.as_deref());
                FileStorage::open(path, namespace)?.into()
            }
            StorageType::Remote => {
                let store: Arc<dyn CredentialStore> = match &self.remote_store {
                    Some(store) => Arc::clone(store),
                    None => Arc::new(match &descriptor.service {
                        Some(service) => KeyringStore::new(service.as_str()),
                        None => KeyringStore::default(),
                    }),
                };
                RemoteStorage::new(namespace, store).into()
            }
        };

        Ok(backend)
    }

    fn secrets_file_path(&self, configured: Option<&Path>) -> PathBuf {
        let path = configured.unwrap_or_else(|| Path::new(DEFAULT_SECRETS_FILE_PATH));
        match &self.base_dir {
            Some(base) => resolve_relative(base, path),
            None => path.to_path_buf(),
        }
    }
}
