//! CloudFormation output names derived from an environment name
//!
//! The stage stacks export their VPC, networking and bucket identifiers as
//! CloudFormation outputs named `{environment}{suffix}`. Only the names are
//! computed here; the values are resolved by whoever imports them.

use super::keys::{ConfigKey, Configuration};

/// Output-name suffix for each derived key
pub const OUTPUT_SUFFIXES: [(ConfigKey, &str); 16] = [
    (ConfigKey::VpcId, "VpcId"),
    (ConfigKey::AvailabilityZone1, "AvailabilityZone1"),
    (ConfigKey::AvailabilityZone2, "AvailabilityZone2"),
    (ConfigKey::AvailabilityZone3, "AvailabilityZone3"),
    (ConfigKey::SubnetId1, "SubnetId1"),
    (ConfigKey::SubnetId2, "SubnetId2"),
    (ConfigKey::SubnetId3, "SubnetId3"),
    (ConfigKey::RouteTable1, "RouteTable1"),
    (ConfigKey::RouteTable2, "RouteTable2"),
    (ConfigKey::RouteTable3, "RouteTable3"),
    (ConfigKey::SharedSecurityGroupId, "SharedSecurityGroupId"),
    (ConfigKey::S3KmsKey, "S3KmsKeyArn"),
    (ConfigKey::S3AccessLogBucket, "S3AccessLogBucket"),
    (ConfigKey::S3RawBucket, "RawBucketName"),
    (ConfigKey::S3ConformedBucket, "ConformedBucketName"),
    (ConfigKey::S3PurposeBuiltBucket, "PurposeBuiltBucketName"),
];

/// Build the output-name mapping for `environment`, plus the `environment`
/// key holding the name itself.
pub fn output_mapping(environment: &str) -> Configuration {
    let mut mapping: Configuration = OUTPUT_SUFFIXES
        .iter()
        .map(|(key, suffix)| (*key, format!("{}{}", environment, suffix)))
        .collect();
    mapping.insert(ConfigKey::Environment, environment);
    mapping
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_output_names() {
        let mapping = output_mapping("Dev");
        assert_eq!(mapping.get(ConfigKey::Environment), Some("Dev"));
        assert_eq!(mapping.get(ConfigKey::VpcId), Some("DevVpcId"));
        assert_eq!(mapping.get(ConfigKey::S3RawBucket), Some("DevRawBucketName"));
        assert_eq!(mapping.get(ConfigKey::S3KmsKey), Some("DevS3KmsKeyArn"));
        assert_eq!(mapping.get(ConfigKey::RouteTable3), Some("DevRouteTable3"));
    }

    #[test]
    fn test_every_suffix_is_present() {
        let mapping = output_mapping("Prod");
        assert_eq!(mapping.len(), OUTPUT_SUFFIXES.len() + 1);
        for (key, suffix) in OUTPUT_SUFFIXES {
            assert_eq!(mapping.get(key), Some(format!("Prod{}", suffix).as_str()));
        }
    }

    #[test]
    fn test_name_is_templated_verbatim() {
        let mapping = output_mapping("qa");
        assert_eq!(mapping.get(ConfigKey::SubnetId1), Some("qaSubnetId1"));
    }
}
