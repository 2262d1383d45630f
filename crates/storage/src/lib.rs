//! Secret storage backends for secret-env
//!
//! A backend answers one question: what is the secret stored under a key?
//! Every lookup is prefixed with the backend's namespace before it reaches
//! the underlying store.
//!
//! - **Plain** echoes the placeholder back, leaving templates untouched in
//!   environments without real secrets.
//! - **File** serves `key=value` lines read once from a local file.
//! - **Remote** asks a [`CredentialStore`], the OS keyring by default.

pub mod backend;
pub mod factory;
pub mod file;
pub mod remote;

pub use backend::{full_key, PlainStorage, Storage, StorageBackend};
pub use factory::StorageFactory;
pub use file::FileStorage;
pub use remote::{CredentialStore, KeyringStore, MemoryStore, RemoteStorage};
