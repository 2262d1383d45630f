use once_cell::sync::Lazy;
use secret_env_core::{EnvAccess, Error, Result};
use std::env;
use std::sync::RwLock;

/// Global RwLock for thread-safe environment variable access
/// Using RwLock since reads are much more common than writes
static ENV_LOCK: Lazy<RwLock<()>> = Lazy::new(|| RwLock::new(()));

/// Thread-safe environment variable operations
pub struct SyncEnv;

impl SyncEnv {
    /// Set an environment variable with thread safety
    pub fn set_var<K: AsRef<str>, V: AsRef<str>>(key: K, value: V) -> Result<()> {
        let key = key.as_ref();
        if key.is_empty() || key.contains('=') || key.contains('\0') {
            return Err(Error::environment(key, "invalid variable name"));
        }
        if value.as_ref().contains('\0') {
            return Err(Error::environment(key, "value contains a NUL byte"));
        }

        let _guard = ENV_LOCK.write().map_err(|e| {
            Error::environment(
                "ENV_LOCK",
                format!("Failed to acquire environment write lock: {e}"),
            )
        })?;

        env::set_var(key, value.as_ref());
        Ok(())
    }

    /// Get an environment variable with thread safety
    ///
    /// Names that cannot exist in the environment (empty, containing `=` or
    /// NUL) read as unset instead of panicking inside `std::env`.
    pub fn var<K: AsRef<str>>(key: K) -> Result<Option<String>> {
        let key = key.as_ref();
        if key.is_empty() || key.contains('=') || key.contains('\0') {
            return Ok(None);
        }

        let _guard = ENV_LOCK.read().map_err(|e| {
            Error::environment(
                "ENV_LOCK",
                format!("Failed to acquire environment read lock: {e}"),
            )
        })?;

        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => {
                Err(Error::environment(key, "value is not valid unicode"))
            }
        }
    }
}

/// The real process environment, accessed through [`SyncEnv`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvAccess for ProcessEnv {
    fn var(&self, key: &str) -> Result<Option<String>> {
        SyncEnv::var(key)
    }

    fn set_var(&self, key: &str, value: &str) -> Result<()> {
        SyncEnv::set_var(key, value)
    }
}
