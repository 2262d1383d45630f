//! Configuration parsing for secret-env
//!
//! This crate reads the per-environment YAML document that declares which
//! storage backend to use and which variables to export.

pub mod config;
pub mod loader;

pub use config::*;
pub use loader::ConfigLoader;
