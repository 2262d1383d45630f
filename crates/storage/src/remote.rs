//! Remote credential stores.

use crate::backend::{full_key, Storage};
use secret_env_core::{constants::DEFAULT_KEYRING_SERVICE, Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// An external store the remote backend delegates lookups to
pub trait CredentialStore: Send + Sync {
    /// Short name used in logs and errors
    fn name(&self) -> &str {
        "remote"
    }

    /// Value stored under the fully namespaced `key`
    fn get(&self, key: &str) -> Result<Option<String>>;
}

impl<F> CredentialStore for F
where
    F: Fn(&str) -> Result<Option<String>> + Send + Sync,
{
    fn get(&self, key: &str) -> Result<Option<String>> {
        self(key)
    }
}

/// In-process credential store, keyed by fully namespaced key
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    secrets: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secret(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.secrets.insert(key.into(), value.into());
        self
    }
}

impl CredentialStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.secrets.get(key).cloned())
    }
}

/// Credential store backed by the OS keyring.
///
/// Each secret is a keyring entry whose user is the namespaced key, under a
/// single service name.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new(DEFAULT_KEYRING_SERVICE)
    }
}

impl CredentialStore for KeyringStore {
    fn name(&self) -> &str {
        "keyring"
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let entry = keyring::Entry::new(&self.service, key)
            .map_err(|e| Error::backend_with_source(self.name(), key, e))?;

        match entry.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(Error::backend_with_source(self.name(), key, e)),
        }
    }
}

/// Backend delegating to a [`CredentialStore`]
#[derive(Clone)]
pub struct RemoteStorage {
    namespace: String,
    store: Arc<dyn CredentialStore>,
}

impl RemoteStorage {
    pub fn new(namespace: impl Into<String>, store: Arc<dyn CredentialStore>) -> Self {
        Self {
            namespace: namespace.into(),
            store,
        }
    }
}

impl fmt::Debug for RemoteStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteStorage")
            .field("namespace", &self.namespace)
            .field("store", &self.store.name())
            .finish()
    }
}

impl Storage for RemoteStorage {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn retrieve(&self, secret_key: &str) -> Result<Option<String>> {
        self.store.get(&full_key(&self.namespace, secret_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_remote_uses_namespaced_key() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&seen);
        let store = move |key: &str| -> Result<Option<String>> {
            recorder.lock().unwrap().push(key.to_string());
            Ok(Some("secret".to_string()))
        };

        let storage = RemoteStorage::new("myapp.", Arc::new(store));
        assert_eq!(
            storage.retrieve("awesome_pass").unwrap(),
            Some("secret".to_string())
        );
        assert_eq!(*seen.lock().unwrap(), vec!["myapp.awesome_pass".to_string()]);
    }

    #[test]
    fn test_remote_absent_value() {
        let storage = RemoteStorage::new("", Arc::new(MemoryStore::new()));
        assert_eq!(storage.retrieve("awesome_pass").unwrap(), None);
    }

    #[test]
    fn test_remote_store_failure_propagates() {
        let store = |key: &str| -> Result<Option<String>> {
            Err(Error::backend("remote", key, "connection refused"))
        };
        let storage = RemoteStorage::new("", Arc::new(store));
        let err = storage.retrieve("awesome_pass").unwrap_err();
        assert!(matches!(err, Error::Backend { .. }));
    }

    #[test]
    fn test_debug_hides_store_internals() {
        let store = MemoryStore::new().with_secret("ns.k", "hunter2");
        let storage = RemoteStorage::new("ns.", Arc::new(store));
        let debug = format!("{storage:?}");
        assert!(debug.contains("memory"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_keyring_store_defaults() {
        assert_eq!(KeyringStore::default().service(), "secret-env");
        assert_eq!(KeyringStore::new("deploy").service(), "deploy");
    }
}
