//! Environment loader
//!
//! One pass over an environment section: build the storage backend, build the
//! batch of records, then export every record whose key is not already set.
//! The first error stops the pass; variables exported before it stay set.

use crate::record::{Batch, Record};
use indexmap::IndexMap;
use secret_env_config::{ConfigLoader, SecretEnvConfig};
use secret_env_core::{EnvAccess, MemoryEnv, Result};
use secret_env_storage::StorageFactory;

/// What a load did to each key of the section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub environment: String,
    /// Keys set by this load, in declared order
    pub exported: Vec<String>,
    /// Keys left alone because the environment already had them
    pub skipped: Vec<String>,
}

/// Loads one configuration document into an environment
#[derive(Clone)]
pub struct Loader {
    config: SecretEnvConfig,
    factory: StorageFactory,
}

impl Loader {
    pub fn new(config: SecretEnvConfig) -> Self {
        Self {
            config,
            factory: StorageFactory::new(),
        }
    }

    /// Read the document located by `config_loader`. Relative secrets-file
    /// paths resolve against the same working directory.
    pub fn from_config_loader(config_loader: &ConfigLoader) -> Result<Self> {
        let config = config_loader.load()?;
        let factory = StorageFactory::new().base_dir(config_loader.working_dir()?);
        Ok(Self { config, factory })
    }

    /// Replace the storage factory
    pub fn storage_factory(mut self, factory: StorageFactory) -> Self {
        self.factory = factory;
        self
    }

    pub fn config(&self) -> &SecretEnvConfig {
        &self.config
    }

    /// Whether the configuration declares `environment`
    pub fn has_environment(&self, environment: &str) -> bool {
        self.config.has_environment(environment)
    }

    /// Build the storage backend and record batch for `environment`
    pub fn batch(&self, environment: &str) -> Result<Batch> {
        let section = self.config.require_environment(environment)?;
        let storage = self.factory.setup(section.storage.as_ref())?;

        let mut batch = Batch::new(storage);
        for (key, raw_value) in &section.env {
            batch.insert(Record::new(key.as_str(), raw_value.as_str()));
        }
        Ok(batch)
    }

    /// Export every unset variable of `environment` into `env`
    pub fn load(&self, environment: &str, env: &dyn EnvAccess) -> Result<LoadReport> {
        let batch = self.batch(environment)?;
        let mut report = LoadReport {
            environment: environment.to_string(),
            ..LoadReport::default()
        };

        for record in batch.records() {
            if env.contains(record.key())? {
                tracing::debug!(key = %record.key(), "Already set, leaving untouched");
                report.skipped.push(record.key().to_string());
                continue;
            }

            let value = record.resolve(&batch, env)?;
            env.set_var(record.key(), &value)?;
            tracing::debug!(key = %record.key(), "Exported");
            report.exported.push(record.key().to_string());
        }

        tracing::info!(
            environment = %environment,
            storage = %batch.storage().kind(),
            exported = report.exported.len(),
            skipped = report.skipped.len(),
            "Loaded secret environment"
        );
        Ok(report)
    }

    /// Values a load would export, computed without writing to `env`
    pub fn resolve(
        &self,
        environment: &str,
        env: &dyn EnvAccess,
    ) -> Result<IndexMap<String, String>> {
        let overlay = Overlay {
            base: env,
            written: MemoryEnv::new(),
        };
        let report = self.load(environment, &overlay)?;

        Ok(report
            .exported
            .into_iter()
            .filter_map(|key| {
                let value = overlay.written.get(&key)?;
                Some((key, value))
            })
            .collect())
    }
}

/// Reads fall through to `base`; writes stay in memory
struct Overlay<'a> {
    base: &'a dyn EnvAccess,
    written: MemoryEnv,
}

impl EnvAccess for Overlay<'_> {
    fn var(&self, key: &str) -> Result<Option<String>> {
        match self.written.get(key) {
            Some(value) => Ok(Some(value)),
            None => self.base.var(key),
        }
    }

    fn set_var(&self, key: &str, value: &str) -> Result<()> {
        self.written.set_var(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secret_env_core::Error;
    use secret_env_storage::MemoryStore;
    use std::sync::Arc;

    fn loader(yaml: &str) -> Loader {
        Loader::new(SecretEnvConfig::from_yaml_str(yaml).unwrap())
    }

    #[test]
    fn test_plain_load_exports_placeholder_text() {
        let loader = loader(
            r##"
development:
  env:
    PASSWORD: "#{awesome_pass}"
    PORT: 80
"##,
        );
        let env = MemoryEnv::new();

        let report = loader.load("development", &env).unwrap();
        assert_eq!(env.get("PASSWORD").as_deref(), Some("#{awesome_pass}"));
        assert_eq!(env.get("PORT").as_deref(), Some("80"));
        assert_eq!(report.exported, vec!["PASSWORD", "PORT"]);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_remote_load_resolves_namespaced_key() {
        let store = MemoryStore::new().with_secret("myapp.awesome_pass", "secret");
        let loader = loader(
            r##"
development:
  storage:
    type: remote
    namespace: myapp.
  env:
    PASSWORD: "#{awesome_pass}"
"##,
        )
        .storage_factory(StorageFactory::new().remote_store(Arc::new(store)));
        let env = MemoryEnv::new();

        loader.load("development", &env).unwrap();
        assert_eq!(env.get("PASSWORD").as_deref(), Some("secret"));
    }

    #[test]
    fn test_remote_absent_value_fails() {
        let loader = loader(
            r##"
development:
  storage:
    type: remote
    namespace: myapp.
  env:
    PASSWORD: "#{awesome_pass}"
"##,
        )
        .storage_factory(StorageFactory::new().remote_store(Arc::new(MemoryStore::new())));
        let env = MemoryEnv::new();

        let err = loader.load("development", &env).unwrap_err();
        assert!(matches!(err, Error::KeyNotFound { ref reference } if reference == "awesome_pass"));
        assert!(env.get("PASSWORD").is_none());
    }

    #[test]
    fn test_existing_variable_is_preserved() {
        let loader = loader(
            r##"
development:
  storage:
    type: remote
  env:
    PASSWORD: "#{missing_everywhere}"
"##,
        )
        .storage_factory(StorageFactory::new().remote_store(Arc::new(MemoryStore::new())));
        let env = MemoryEnv::from_vars([("PASSWORD", "operator-override")]);

        let report = loader.load("development", &env).unwrap();
        assert_eq!(env.get("PASSWORD").as_deref(), Some("operator-override"));
        assert_eq!(report.skipped, vec!["PASSWORD"]);
        assert!(report.exported.is_empty());
    }

    #[test]
    fn test_existing_variable_feeds_siblings() {
        let loader = loader(
            r##"
development:
  env:
    DB_HOST: "#{db_host}"
    DB_URL: "postgres://#{DB_HOST}/app"
"##,
        );
        let env = MemoryEnv::from_vars([("DB_HOST", "override.internal")]);

        loader.load("development", &env).unwrap();
        assert_eq!(
            env.get("DB_URL").as_deref(),
            Some("postgres://override.internal/app")
        );
    }

    #[test]
    fn test_failure_keeps_earlier_exports() {
        let loader = loader(
            r##"
development:
  storage:
    type: remote
  env:
    FIRST: plain
    SECOND: "#{missing}"
    THIRD: never
"##,
        )
        .storage_factory(StorageFactory::new().remote_store(Arc::new(MemoryStore::new())));
        let env = MemoryEnv::new();

        assert!(loader.load("development", &env).is_err());
        assert_eq!(env.get("FIRST").as_deref(), Some("plain"));
        assert!(env.get("SECOND").is_none());
        assert!(env.get("THIRD").is_none());
    }

    #[test]
    fn test_missing_environment() {
        let loader = loader("development: {}\n");
        let err = loader.load("production", &MemoryEnv::new()).unwrap_err();
        assert!(matches!(err, Error::EnvironmentNotFound { .. }));
    }

    #[test]
    fn test_unknown_storage_type() {
        let loader = loader("development:\n  storage:\n    type: vault\n");
        let err = loader.load("development", &MemoryEnv::new()).unwrap_err();
        assert_eq!(err.to_string(), "Unknown storage type: vault");
    }

    #[test]
    fn test_null_env_loads_nothing() {
        let loader = loader("development:\n  env:\n");
        let env = MemoryEnv::new();
        let report = loader.load("development", &env).unwrap();
        assert!(report.exported.is_empty());
        assert!(env.is_empty());
    }

    #[test]
    fn test_has_environment() {
        let loader = loader("development: {}\n");
        assert!(loader.has_environment("development"));
        assert!(!loader.has_environment("production"));
    }

    #[test]
    fn test_resolve_does_not_write() {
        let loader = loader(
            r##"
development:
  env:
    HOST: db.internal
    URL: "postgres://#{HOST}/app"
    KEEP: "#{ignored}"
"##,
        );
        let env = MemoryEnv::from_vars([("KEEP", "kept")]);

        let values = loader.resolve("development", &env).unwrap();
        assert_eq!(values.get("URL").map(String::as_str), Some("postgres://db.internal/app"));
        assert_eq!(values.keys().collect::<Vec<_>>(), vec!["HOST", "URL"]);
        assert_eq!(env.len(), 1);
    }
}
