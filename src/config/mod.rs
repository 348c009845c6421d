//! Configuration module
//!
//! Per-environment tables, the resource naming convention and the derived
//! CloudFormation output names consumed by the pipeline stacks, plus the
//! settings of the command-line tool.

pub mod constants;
pub mod environment;
pub mod keys;
pub mod naming;
pub mod outputs;
pub mod provider;
pub mod settings;
pub mod tables;

pub use environment::Environment;
pub use keys::{ConfigKey, Configuration};
pub use naming::validate_resource_name_prefix;
pub use outputs::output_mapping;
pub use provider::{
    get_all_configurations, get_environment_configuration, get_local_configuration,
    get_logical_id_prefix, get_resource_name_prefix, AllConfigurations, ConfigurationProvider,
};
pub use settings::Settings;
pub use tables::{DeploymentTable, LocalTables, StageTable};
