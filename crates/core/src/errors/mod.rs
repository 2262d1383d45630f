//! Error handling for secret-env

mod builders;
mod conversions;
mod types;

pub use types::{Error, Result};
