//! Literal configuration values
//!
//! These are the account-specific values baked into the pipeline. Changing
//! one of them means redeploying the pipeline.

// =============================================================================
// Account
// =============================================================================

/// AWS account hosting every environment
pub const ACCOUNT_ID: &str = "391970746680";

/// AWS region for every environment
pub const REGION: &str = "ap-southeast-2";

/// CIDR block of the VPC created in each stage
pub const VPC_CIDR: &str = "10.0.0.0/16";

// =============================================================================
// Source repository
// =============================================================================

/// GitHub organization (or user) owning the infrastructure repository
pub const GITHUB_REPOSITORY_OWNER_NAME: &str = "sonubraham-aremedia";

/// Infrastructure repository watched by the pipeline
pub const GITHUB_REPOSITORY_NAME: &str = "aws-cdk-pipelines-datalake-infrastructure";

// =============================================================================
// Naming
// =============================================================================

/// Used in the logical id of CloudFormation resources. Capital case.
pub const LOGICAL_ID_PREFIX: &str = "DataLakeCdkBlog";

/// Prefixed onto resources whose names must be globally unique.
/// Lowercase alphanumerics and hyphens only, no leading or trailing hyphen.
pub const RESOURCE_NAME_PREFIX: &str = "dl";

// =============================================================================
// Secrets Manager
// =============================================================================

/// Secrets Manager path of the GitHub personal access token
pub const GITHUB_TOKEN_SECRET_PATH: &str = "/DataLake/GitHubToken";
