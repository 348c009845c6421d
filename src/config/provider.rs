//! Configuration provider
//!
//! Combines the local tables, the naming check and the derived output names
//! into the per-environment configuration consumed by the pipeline stacks.
//! Every query re-validates the deployment resource name prefix before
//! answering, so a bad prefix surfaces on whichever call happens first.

use std::collections::BTreeMap;

use crate::error::Result;

use super::constants::GITHUB_TOKEN_SECRET_PATH;
use super::environment::Environment;
use super::keys::{ConfigKey, Configuration};
use super::naming::validate_resource_name_prefix;
use super::outputs::output_mapping;
use super::tables::LocalTables;

/// Effective configuration for every environment
pub type AllConfigurations = BTreeMap<Environment, Configuration>;

/// Read-only configuration source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationProvider {
    tables: LocalTables,
}

impl ConfigurationProvider {
    /// Create a provider over explicit tables
    pub fn new(tables: LocalTables) -> Self {
        Self { tables }
    }

    /// The underlying local tables
    pub fn tables(&self) -> &LocalTables {
        &self.tables
    }

    /// Validated access to the local tables
    fn checked_tables(&self) -> Result<&LocalTables> {
        validate_resource_name_prefix(&self.tables.deployment.resource_name_prefix)?;
        Ok(&self.tables)
    }

    /// Manually configured values for `environment`.
    ///
    /// # Errors
    /// `NamingConventionViolation` if the deployment resource name prefix is
    /// malformed (checked first, whatever environment is requested), then
    /// `UnknownEnvironment` if `environment` is not a known name.
    pub fn get_local_configuration(&self, environment: &str) -> Result<Configuration> {
        let tables = self.checked_tables()?;
        let env = environment.parse::<Environment>().map_err(|err| {
            tracing::warn!(environment = %environment, "Requested environment does not exist");
            err
        })?;

        tracing::debug!(environment = %env, "Resolved local configuration");
        Ok(tables.configuration_for(env))
    }

    /// Derived output names for `environment` overlaid with its local values.
    /// Local values win on key collision.
    pub fn get_environment_configuration(&self, environment: &str) -> Result<Configuration> {
        let outputs = output_mapping(environment);
        let local = self.get_local_configuration(environment)?;
        Ok(outputs.merge(local))
    }

    /// Configuration for all four environments.
    ///
    /// The deployment entry holds its local values plus the GitHub token
    /// secret path; it has no derived output names.
    pub fn get_all_configurations(&self) -> Result<AllConfigurations> {
        let mut all = AllConfigurations::new();

        let mut deployment = Configuration::new();
        deployment.insert(ConfigKey::Environment, Environment::Deployment.as_str());
        deployment.insert(ConfigKey::GithubToken, GITHUB_TOKEN_SECRET_PATH);
        let local = self.get_local_configuration(Environment::Deployment.as_str())?;
        all.insert(Environment::Deployment, deployment.merge(local));

        for env in Environment::STAGES {
            all.insert(env, self.get_environment_configuration(env.as_str())?);
        }

        Ok(all)
    }

    /// Prefix for the logical id of every CloudFormation resource
    pub fn get_logical_id_prefix(&self) -> Result<String> {
        Ok(self.checked_tables()?.deployment.logical_id_prefix.clone())
    }

    /// Prefix for every physical resource name
    pub fn get_resource_name_prefix(&self) -> Result<String> {
        Ok(self.checked_tables()?.deployment.resource_name_prefix.clone())
    }
}

/// [`ConfigurationProvider::get_local_configuration`] on the built-in tables
pub fn get_local_configuration(environment: &str) -> Result<Configuration> {
    ConfigurationProvider::default().get_local_configuration(environment)
}

/// [`ConfigurationProvider::get_environment_configuration`] on the built-in tables
pub fn get_environment_configuration(environment: &str) -> Result<Configuration> {
    ConfigurationProvider::default().get_environment_configuration(environment)
}

/// [`ConfigurationProvider::get_all_configurations`] on the built-in tables
pub fn get_all_configurations() -> Result<AllConfigurations> {
    ConfigurationProvider::default().get_all_configurations()
}

/// [`ConfigurationProvider::get_logical_id_prefix`] on the built-in tables
pub fn get_logical_id_prefix() -> Result<String> {
    ConfigurationProvider::default().get_logical_id_prefix()
}

/// [`ConfigurationProvider::get_resource_name_prefix`] on the built-in tables
pub fn get_resource_name_prefix() -> Result<String> {
    ConfigurationProvider::default().get_resource_name_prefix()
}
