//! Configuration keys and the key/value mapping returned to callers

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Semantic name of a configuration value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigKey {
    Environment,

    // Static values
    AccountId,
    Region,
    VpcCidr,
    GithubRepositoryOwnerName,
    GithubRepositoryName,
    LogicalIdPrefix,
    ResourceNamePrefix,

    // Secrets Manager paths
    GithubToken,

    // CloudFormation output names
    VpcId,
    AvailabilityZone1,
    AvailabilityZone2,
    AvailabilityZone3,
    SubnetId1,
    SubnetId2,
    SubnetId3,
    RouteTable1,
    RouteTable2,
    RouteTable3,
    SharedSecurityGroupId,
    S3KmsKey,
    S3AccessLogBucket,
    S3RawBucket,
    S3ConformedBucket,
    S3PurposeBuiltBucket,
}

impl ConfigKey {
    /// Name used when the mapping is serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::Environment => "environment",
            ConfigKey::AccountId => "account_id",
            ConfigKey::Region => "region",
            ConfigKey::VpcCidr => "vpc_cidr",
            ConfigKey::GithubRepositoryOwnerName => "github_repository_owner_name",
            ConfigKey::GithubRepositoryName => "github_repository_name",
            ConfigKey::LogicalIdPrefix => "logical_id_prefix",
            ConfigKey::ResourceNamePrefix => "resource_name_prefix",
            ConfigKey::GithubToken => "github_token",
            ConfigKey::VpcId => "vpc_id",
            ConfigKey::AvailabilityZone1 => "availability_zone_1",
            ConfigKey::AvailabilityZone2 => "availability_zone_2",
            ConfigKey::AvailabilityZone3 => "availability_zone_3",
            ConfigKey::SubnetId1 => "subnet_id_1",
            ConfigKey::SubnetId2 => "subnet_id_2",
            ConfigKey::SubnetId3 => "subnet_id_3",
            ConfigKey::RouteTable1 => "route_table_1",
            ConfigKey::RouteTable2 => "route_table_2",
            ConfigKey::RouteTable3 => "route_table_3",
            ConfigKey::SharedSecurityGroupId => "shared_security_group_id",
            ConfigKey::S3KmsKey => "s3_kms_key",
            ConfigKey::S3AccessLogBucket => "s3_access_log_bucket",
            ConfigKey::S3RawBucket => "s3_raw_bucket",
            ConfigKey::S3ConformedBucket => "s3_conformed_bucket",
            ConfigKey::S3PurposeBuiltBucket => "s3_purpose_built_bucket",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key/value configuration for one environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Configuration(BTreeMap<ConfigKey, String>);

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value
    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn contains_key(&self, key: ConfigKey) -> bool {
        self.0.contains_key(&key)
    }

    /// Set a value, returning the one it replaced
    pub fn insert(&mut self, key: ConfigKey, value: impl Into<String>) -> Option<String> {
        self.0.insert(key, value.into())
    }

    /// Overlay `other` onto this mapping. Values from `other` win.
    pub fn merge(mut self, other: Configuration) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = ConfigKey> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, ConfigKey, String> {
        self.0.iter()
    }
}

impl FromIterator<(ConfigKey, String)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (ConfigKey, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Configuration {
    type Item = (ConfigKey, String);
    type IntoIter = btree_map::IntoIter<ConfigKey, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_matches_serde_name() {
        for key in [
            ConfigKey::Environment,
            ConfigKey::GithubRepositoryOwnerName,
            ConfigKey::AvailabilityZone2,
            ConfigKey::S3KmsKey,
            ConfigKey::S3PurposeBuiltBucket,
        ] {
            let serialized = serde_json::to_string(&key).unwrap();
            assert_eq!(serialized, format!("\"{}\"", key.as_str()));
        }
    }

    #[test]
    fn test_merge_prefers_overlay() {
        let mut base = Configuration::new();
        base.insert(ConfigKey::Region, "us-east-1");
        base.insert(ConfigKey::VpcId, "DevVpcId");

        let mut overlay = Configuration::new();
        overlay.insert(ConfigKey::Region, "ap-southeast-2");

        let merged = base.merge(overlay);
        assert_eq!(merged.get(ConfigKey::Region), Some("ap-southeast-2"));
        assert_eq!(merged.get(ConfigKey::VpcId), Some("DevVpcId"));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let mut config = Configuration::new();
        config.insert(ConfigKey::AccountId, "123");
        config.insert(ConfigKey::Environment, "Dev");

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json, serde_json::json!({"environment": "Dev", "account_id": "123"}));
    }
}
