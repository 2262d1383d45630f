//! Pending environment assignments and their resolution.

use crate::placeholder::{segments, Placeholder, Segment};
use indexmap::IndexMap;
use secret_env_core::{constants::MAX_REFERENCE_DEPTH, EnvAccess, Error, Result};
use secret_env_storage::{Storage, StorageBackend};

/// One variable waiting to be exported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    key: String,
    raw_value: String,
}

impl Record {
    pub fn new(key: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            raw_value: raw_value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// Expand every placeholder in the raw value.
    ///
    /// Nothing is cached: a sibling referenced twice is resolved twice, and
    /// the environment is read at the moment each candidate is tried.
    pub fn resolve(&self, batch: &Batch, env: &dyn EnvAccess) -> Result<String> {
        Resolution::new(batch, env).resolve_record(self)
    }
}

/// Records loaded together, sharing one storage backend
#[derive(Debug, Default)]
pub struct Batch {
    records: IndexMap<String, Record>,
    storage: StorageBackend,
}

impl Batch {
    pub fn new(storage: StorageBackend) -> Self {
        Self {
            records: IndexMap::new(),
            storage,
        }
    }

    /// Build a batch from `(key, raw_value)` pairs in order
    pub fn from_entries<I, K, V>(storage: StorageBackend, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut batch = Self::new(storage);
        for (key, raw_value) in entries {
            batch.insert(Record::new(key, raw_value));
        }
        batch
    }

    /// Add a record; a later record with the same key replaces the earlier one
    pub fn insert(&mut self, record: Record) {
        self.records.insert(record.key.clone(), record);
    }

    pub fn get(&self, key: &str) -> Option<&Record> {
        self.records.get(key)
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn storage(&self) -> &StorageBackend {
        &self.storage
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve the record stored under `key`, `None` if there is none
    pub fn resolve(&self, key: &str, env: &dyn EnvAccess) -> Result<Option<String>> {
        self.get(key)
            .map(|record| record.resolve(self, env))
            .transpose()
    }
}

/// State of one top-level resolution: the chain of records currently being
/// expanded, innermost last.
struct Resolution<'a> {
    batch: &'a Batch,
    env: &'a dyn EnvAccess,
    chain: Vec<&'a str>,
}

impl<'a> Resolution<'a> {
    fn new(batch: &'a Batch, env: &'a dyn EnvAccess) -> Self {
        Self {
            batch,
            env,
            chain: Vec::new(),
        }
    }

    fn resolve_record(&mut self, record: &'a Record) -> Result<String> {
        if self.chain.contains(&record.key()) {
            let mut cycle: Vec<String> = self.chain.iter().map(|k| k.to_string()).collect();
            cycle.push(record.key().to_string());
            return Err(Error::cyclic_reference(cycle));
        }
        if self.chain.len() >= MAX_REFERENCE_DEPTH {
            return Err(Error::reference_depth_exceeded(
                record.key(),
                MAX_REFERENCE_DEPTH,
            ));
        }

        self.chain.push(record.key());
        let result = self.expand(record.raw_value());
        self.chain.pop();
        result
    }

    fn expand(&mut self, raw: &'a str) -> Result<String> {
        let mut value = String::with_capacity(raw.len());
        for segment in segments(raw) {
            match segment {
                Segment::Literal(text) => value.push_str(text),
                Segment::Placeholder(placeholder) => {
                    value.push_str(&self.resolve_placeholder(placeholder)?)
                }
            }
        }
        Ok(value)
    }

    fn resolve_placeholder(&mut self, placeholder: Placeholder<'a>) -> Result<String> {
        for candidate in placeholder.candidates() {
            if let Some(value) = self.lookup(candidate)? {
                return Ok(value);
            }
        }
        Err(Error::key_not_found(placeholder.reference()))
    }

    /// Environment, then sibling record, then storage. A record naming its
    /// own key is not its own sibling.
    fn lookup(&mut self, candidate: &'a str) -> Result<Option<String>> {
        if let Some(value) = non_empty(self.env.var(candidate)?) {
            tracing::trace!(candidate = %candidate, "Resolved from environment");
            return Ok(Some(value));
        }

        let sibling = match self.chain.last() {
            Some(&current) if current == candidate => None,
            _ => self.batch.get(candidate),
        };
        if let Some(sibling) = sibling {
            let value = self.resolve_record(sibling)?;
            if !value.is_empty() {
                tracing::trace!(candidate = %candidate, "Resolved from sibling record");
                return Ok(Some(value));
            }
        }

        Ok(non_empty(self.batch.storage().retrieve(candidate)?))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
