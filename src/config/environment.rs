//! Deployment environments
//!
//! Each environment targets one account/stage of the pipeline. The
//! `Deployment` environment hosts the pipeline itself; the remaining three are
//! the stages it deploys infrastructure into.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Target environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum Environment {
    Deployment,
    Dev,
    Test,
    Prod,
}

impl Environment {
    /// All environments in declaration order
    pub const ALL: [Environment; 4] = [
        Environment::Deployment,
        Environment::Dev,
        Environment::Test,
        Environment::Prod,
    ];

    /// Environments that receive derived CloudFormation outputs
    pub const STAGES: [Environment; 3] = [Environment::Dev, Environment::Test, Environment::Prod];

    /// Canonical name, as used for lookups and output-name templating
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Deployment => "Deployment",
            Environment::Dev => "Dev",
            Environment::Test => "Test",
            Environment::Prod => "Prod",
        }
    }

    /// Check if this is the pipeline-hosting environment
    pub fn is_deployment(&self) -> bool {
        *self == Environment::Deployment
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    /// Lookups are exact: `"dev"` is not `"Dev"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Environment::ALL
            .into_iter()
            .find(|env| env.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownEnvironment(s.to_string()))
    }
}
