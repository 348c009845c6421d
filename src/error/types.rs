//! Configuration error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "Resource names may only contain lowercase alphanumeric characters and hyphens \
         and cannot contain leading or trailing hyphens (got {prefix:?})"
    )]
    NamingConventionViolation { prefix: String },

    #[error("The requested environment: {0} does not exist in local mappings")]
    UnknownEnvironment(String),
}

impl ConfigError {
    /// Stable machine-readable code for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::NamingConventionViolation { .. } => "naming_convention_violation",
            ConfigError::UnknownEnvironment(_) => "unknown_environment",
        }
    }
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
