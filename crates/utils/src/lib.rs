//! Shared utilities for secret-env
//!
//! This crate binds the process environment behind the core `EnvAccess`
//! trait and sets up logging for the binary.

pub mod sync;
pub mod tracing;

pub use sync::env::{ProcessEnv, SyncEnv};
