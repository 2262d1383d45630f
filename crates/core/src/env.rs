//! Environment access abstraction.
//!
//! Resolution reads the environment on every candidate lookup and the loader
//! writes it once per exported key. Both go through [`EnvAccess`] so the
//! process environment is bound in exactly one place and tests can swap in a
//! [`MemoryEnv`].

use crate::errors::Result;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Read/write access to a set of environment variables
pub trait EnvAccess {
    /// Current value of `key`, or `None` when it is unset
    fn var(&self, key: &str) -> Result<Option<String>>;

    /// Set `key` to `value`
    fn set_var(&self, key: &str, value: &str) -> Result<()>;

    /// Whether `key` is set, regardless of its value
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.var(key)?.is_some())
    }
}

impl<T: EnvAccess + ?Sized> EnvAccess for &T {
    fn var(&self, key: &str) -> Result<Option<String>> {
        (**self).var(key)
    }

    fn set_var(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_var(key, value)
    }

    fn contains(&self, key: &str) -> Result<bool> {
        (**self).contains(key)
    }
}

/// An isolated in-memory environment
#[derive(Debug, Default)]
pub struct MemoryEnv {
    vars: RwLock<HashMap<String, String>>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the given variables
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: RwLock::new(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.vars.read().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.vars.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.read().is_empty()
    }
}

impl EnvAccess for MemoryEnv {
    fn var(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn set_var(&self, key: &str, value: &str) -> Result<()> {
        self.vars.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
