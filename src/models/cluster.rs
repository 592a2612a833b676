use serde::{Deserialize, Serialize};

use super::resource::ObjectMeta;

/// Provider name that marks a cluster as serverless.
pub const SERVERLESS_PROVIDER: &str = "SERVERLESS";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtlasCluster {
    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: AtlasClusterSpec,
}

/// The three mutually exclusive ways of describing a cluster.
///
/// Decoded permissively: any combination of slots may be present, and
/// the validator is responsible for rejecting everything but exactly one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtlasClusterSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_spec: Option<ClusterSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_cluster_spec: Option<AdvancedClusterSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub serverless_spec: Option<ServerlessSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_type: Option<String>,

    #[serde(
        rename = "mongoDBMajorVersion",
        skip_serializing_if = "Option::is_none"
    )]
    pub mongodb_major_version: Option<String>,

    #[serde(rename = "diskSizeGB", skip_serializing_if = "Option::is_none")]
    pub disk_size_gb: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_shards: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_backup_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_settings: Option<ProviderSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSettings {
    /// Empty when not set.
    #[serde(default, deserialize_with = "crate::models::serde_helpers::null_as_empty")]
    pub instance_size_name: String,

    /// Empty when not set.
    #[serde(default, deserialize_with = "crate::models::serde_helpers::null_as_empty")]
    pub provider_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backing_provider_name: Option<String>,
}

impl ProviderSettings {
    pub fn is_serverless(&self) -> bool {
        self.provider_name == SERVERLESS_PROVIDER
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedClusterSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_type: Option<String>,

    #[serde(
        rename = "mongoDBMajorVersion",
        skip_serializing_if = "Option::is_none"
    )]
    pub mongodb_major_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replication_specs: Vec<ReplicationSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_shards: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub region_configs: Vec<RegionConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub electable_specs: Option<HardwareSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only_specs: Option<HardwareSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_size: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_count: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerlessSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_settings: Option<ServerlessProviderSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerlessProviderSettings {
    #[serde(default, deserialize_with = "crate::models::serde_helpers::null_as_empty")]
    pub provider_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backing_provider_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
}

/// A cluster spec narrowed to the single shape it uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClusterDeployment<'a> {
    Basic(&'a ClusterSpec),
    Advanced(&'a AdvancedClusterSpec),
    Serverless(&'a ServerlessSpec),
}

impl ClusterDeployment<'_> {
    pub fn variant_name(&self) -> &'static str {
        match self {
            ClusterDeployment::Basic(_) => "clusterSpec",
            ClusterDeployment::Advanced(_) => "advancedClusterSpec",
            ClusterDeployment::Serverless(_) => "serverlessSpec",
        }
    }

    pub fn cluster_name(&self) -> Option<&str> {
        match self {
            ClusterDeployment::Basic(spec) => spec.name.as_deref(),
            ClusterDeployment::Advanced(spec) => spec.name.as_deref(),
            ClusterDeployment::Serverless(spec) => spec.name.as_deref(),
        }
    }
}

impl AtlasClusterSpec {
    /// Returns the deployment shape, or `None` unless exactly one slot is set.
    pub fn deployment(&self) -> Option<ClusterDeployment<'_>> {
        match (
            &self.cluster_spec,
            &self.advanced_cluster_spec,
            &self.serverless_spec,
        ) {
            (Some(basic), None, None) => Some(ClusterDeployment::Basic(basic)),
            (None, Some(advanced), None) => Some(ClusterDeployment::Advanced(advanced)),
            (None, None, Some(serverless)) => Some(ClusterDeployment::Serverless(serverless)),
            _ => None,
        }
    }
}
