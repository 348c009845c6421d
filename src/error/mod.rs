//! Error types

mod types;

pub use types::{ConfigError, Result};
