//! Core errors, constants, and environment access for `secret-env`.
//!
//! ## Key Components
//!
//! - **`errors`**: the `Error` enum and `Result` alias shared by every crate
//!   in the workspace.
//! - **`env`**: the [`EnvAccess`] trait through which resolution reads and the
//!   loader writes environment variables, plus an in-memory implementation.
//! - **`constants`**: default paths, environment variable names, and the
//!   placeholder grammar tokens.

pub mod constants;
pub mod env;
pub mod errors;

pub use self::{
    constants::*,
    env::{EnvAccess, MemoryEnv},
    errors::{Error, Result},
};
