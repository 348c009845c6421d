//! Local configuration tables
//!
//! One typed record per environment. `LocalTables::default()` holds the
//! literal values from [`constants`](super::constants).

use serde::{Deserialize, Serialize};

use super::constants::{
    ACCOUNT_ID, GITHUB_REPOSITORY_NAME, GITHUB_REPOSITORY_OWNER_NAME, LOGICAL_ID_PREFIX, REGION,
    RESOURCE_NAME_PREFIX, VPC_CIDR,
};
use super::environment::Environment;
use super::keys::{ConfigKey, Configuration};

/// Manually configured values for the pipeline-hosting environment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeploymentTable {
    pub account_id: String,
    pub region: String,
    /// GitHub organization name when using GitHub Enterprise
    pub github_repository_owner_name: String,
    pub github_repository_name: String,
    pub logical_id_prefix: String,
    pub resource_name_prefix: String,
}

impl Default for DeploymentTable {
    fn default() -> Self {
        Self {
            account_id: ACCOUNT_ID.to_string(),
            region: REGION.to_string(),
            github_repository_owner_name: GITHUB_REPOSITORY_OWNER_NAME.to_string(),
            github_repository_name: GITHUB_REPOSITORY_NAME.to_string(),
            logical_id_prefix: LOGICAL_ID_PREFIX.to_string(),
            resource_name_prefix: RESOURCE_NAME_PREFIX.to_string(),
        }
    }
}

impl DeploymentTable {
    pub fn to_configuration(&self) -> Configuration {
        [
            (ConfigKey::AccountId, &self.account_id),
            (ConfigKey::Region, &self.region),
            (ConfigKey::GithubRepositoryOwnerName, &self.github_repository_owner_name),
            (ConfigKey::GithubRepositoryName, &self.github_repository_name),
            (ConfigKey::LogicalIdPrefix, &self.logical_id_prefix),
            (ConfigKey::ResourceNamePrefix, &self.resource_name_prefix),
        ]
        .into_iter()
        .map(|(key, value)| (key, value.clone()))
        .collect()
    }
}

/// Manually configured values for a stage environment (Dev, Test, Prod)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StageTable {
    pub account_id: String,
    pub region: String,
    pub vpc_cidr: String,
}

impl Default for StageTable {
    fn default() -> Self {
        Self {
            account_id: ACCOUNT_ID.to_string(),
            region: REGION.to_string(),
            vpc_cidr: VPC_CIDR.to_string(),
        }
    }
}

impl StageTable {
    pub fn to_configuration(&self) -> Configuration {
        [
            (ConfigKey::AccountId, &self.account_id),
            (ConfigKey::Region, &self.region),
            (ConfigKey::VpcCidr, &self.vpc_cidr),
        ]
        .into_iter()
        .map(|(key, value)| (key, value.clone()))
        .collect()
    }
}

/// Local tables for all four environments
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocalTables {
    pub deployment: DeploymentTable,
    pub dev: StageTable,
    pub test: StageTable,
    pub prod: StageTable,
}

impl LocalTables {
    /// Local values for `environment` as a key/value mapping
    pub fn configuration_for(&self, environment: Environment) -> Configuration {
        match environment {
            Environment::Deployment => self.deployment.to_configuration(),
            Environment::Dev => self.dev.to_configuration(),
            Environment::Test => self.test.to_configuration(),
            Environment::Prod => self.prod.to_configuration(),
        }
    }
}
