//! Data lake configuration CLI
//!
//! Prints the effective configuration of the data lake infrastructure
//! pipeline as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use datalake_config::{config::Settings, logging::init_tracing, ConfigurationProvider, Environment};
use serde_json::Value;

/// Data lake configuration
///
/// Without a selector, prints the configuration of every environment.
#[derive(Parser, Debug)]
#[command(name = "datalake-config")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Environment to print: Deployment, Dev, Test or Prod
    #[arg(short, long, conflicts_with_all = ["logical_id_prefix", "resource_name_prefix"])]
    environment: Option<String>,

    /// With --environment, print only the manually configured values
    #[arg(long, requires = "environment")]
    local: bool,

    /// Print the logical id prefix
    #[arg(long, conflicts_with = "resource_name_prefix")]
    logical_id_prefix: bool,

    /// Print the resource name prefix
    #[arg(long)]
    resource_name_prefix: bool,

    /// Log level: trace, debug, info, warn, error (overrides LOG_LEVEL env var)
    #[arg(long)]
    log_level: Option<String>,

    /// Print single-line JSON (overrides OUTPUT_COMPACT env var)
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load()?;

    // Override settings with CLI arguments
    if let Some(log_level) = args.log_level.clone() {
        settings.log_level = log_level;
    }
    if args.compact {
        settings.compact_output = true;
    }

    init_tracing(&settings.log_level);

    tracing::debug!(
        app_name = %settings.app_name,
        version = %settings.app_version,
        "Starting configuration lookup"
    );

    let provider = ConfigurationProvider::default();
    let output = select(&args, &provider)?;

    let rendered = if settings.compact_output {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    println!("{}", rendered);

    Ok(())
}

/// Run the provider operation chosen by `args`
fn select(args: &Args, provider: &ConfigurationProvider) -> Result<Value> {
    if args.logical_id_prefix {
        let prefix = provider
            .get_logical_id_prefix()
            .context("Failed to read logical id prefix")?;
        return Ok(Value::String(prefix));
    }

    if args.resource_name_prefix {
        let prefix = provider
            .get_resource_name_prefix()
            .context("Failed to read resource name prefix")?;
        return Ok(Value::String(prefix));
    }

    let Some(environment) = args.environment.as_deref() else {
        let all = provider
            .get_all_configurations()
            .context("Failed to build configuration for all environments")?;
        return Ok(serde_json::to_value(all)?);
    };

    // Deployment has no derived outputs, so it always gets the local table
    let local_only = args.local || environment == Environment::Deployment.as_str();
    let result = if local_only {
        provider.get_local_configuration(environment)
    } else {
        provider.get_environment_configuration(environment)
    };
    let config =
        result.with_context(|| format!("Failed to build configuration for {}", environment))?;

    Ok(serde_json::to_value(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use datalake_config::{config::LocalTables, ConfigError};

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("datalake-config").chain(argv.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_all_environments_by_default() {
        let value = select(&parse(&[]), &ConfigurationProvider::default()).unwrap();
        let object = value.as_object().unwrap();
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 4);
        for env in ["Deployment", "Dev", "Test", "Prod"] {
            assert!(object.contains_key(env));
        }
        assert_eq!(value["Deployment"]["github_token"], "/DataLake/GitHubToken");
    }

    #[test]
    fn test_single_environment() {
        let value = select(&parse(&["-e", "Dev"]), &ConfigurationProvider::default()).unwrap();
        assert_eq!(value["vpc_id"], "DevVpcId");
        assert_eq!(value["environment"], "Dev");

        let local = select(&parse(&["-e", "Dev", "--local"]), &ConfigurationProvider::default())
            .unwrap();
        assert!(local.get("vpc_id").is_none());
        assert_eq!(local["vpc_cidr"], "10.0.0.0/16");
    }

    #[test]
    fn test_deployment_prints_local_table() {
        let value =
            select(&parse(&["--environment", "Deployment"]), &ConfigurationProvider::default())
                .unwrap();
        assert_eq!(value["resource_name_prefix"], "dl");
        assert!(value.get("vpc_id").is_none());
    }

    #[test]
    fn test_prefixes() {
        let provider = ConfigurationProvider::default();
        assert_eq!(select(&parse(&["--logical-id-prefix"]), &provider).unwrap(), "DataLakeCdkBlog");
        assert_eq!(select(&parse(&["--resource-name-prefix"]), &provider).unwrap(), "dl");
    }

    #[test]
    fn test_errors_keep_their_kind() {
        let err = select(&parse(&["-e", "Staging"]), &ConfigurationProvider::default()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::UnknownEnvironment("Staging".to_string()))
        );

        let mut tables = LocalTables::default();
        tables.deployment.resource_name_prefix = "Dl".to_string();
        let err = select(&parse(&[]), &ConfigurationProvider::new(tables)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::NamingConventionViolation { .. })
        ));
    }

    #[test]
    fn test_conflicting_selectors_rejected() {
        let argv = ["datalake-config", "--logical-id-prefix", "--resource-name-prefix"];
        assert!(Args::try_parse_from(argv).is_err());
        assert!(Args::try_parse_from(["datalake-config", "--local"]).is_err());
    }
}
