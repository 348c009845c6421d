//! Data lake infrastructure configuration library

// Public modules
pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigKey, Configuration, ConfigurationProvider, Environment, Settings};
pub use error::{ConfigError, Result};
