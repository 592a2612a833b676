use serde::{Deserialize, Serialize};

use super::cluster::AtlasCluster;
use super::database_user::AtlasDatabaseUser;
use super::project::AtlasProject;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectMeta {
    #[serde(default, deserialize_with = "crate::models::serde_helpers::null_as_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// A manifest decoded by its `kind` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Resource {
    #[serde(rename = "AtlasCluster")]
    Cluster(AtlasCluster),

    #[serde(rename = "AtlasProject")]
    Project(AtlasProject),

    #[serde(rename = "AtlasDatabaseUser")]
    DatabaseUser(AtlasDatabaseUser),
}

impl Resource {
    pub fn kind(&self) -> &'static str {
        match self {
            Resource::Cluster(_) => "AtlasCluster",
            Resource::Project(_) => "AtlasProject",
            Resource::DatabaseUser(_) => "AtlasDatabaseUser",
        }
    }

    pub fn metadata(&self) -> &ObjectMeta {
        match self {
            Resource::Cluster(cluster) => &cluster.metadata,
            Resource::Project(project) => &project.metadata,
            Resource::DatabaseUser(user) => &user.metadata,
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata().name
    }
}
