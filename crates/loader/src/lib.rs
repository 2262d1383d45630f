//! Secret placeholder resolution and environment loading.
//!
//! A raw value such as `postgres://app:#{db_password || fallback_password}@db`
//! is expanded placeholder by placeholder. Each candidate key is looked up, in
//! order, in the live environment, then among the other records of the same
//! batch, then in the storage backend; the first non-empty value wins.

pub mod loader;
pub mod placeholder;
pub mod record;

pub use loader::{LoadReport, Loader};
pub use placeholder::{segments, Placeholder, Segment};
pub use record::{Batch, Record};
