use serde::{Deserialize, Serialize};

use super::resource::ObjectMeta;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtlasDatabaseUser {
    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: AtlasDatabaseUserSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtlasDatabaseUserSpec {
    #[serde(default, deserialize_with = "crate::models::serde_helpers::null_as_empty")]
    pub username: String,

    /// Authentication database, `admin` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<RoleSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_ref: Option<ResourceRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSpec {
    pub role_name: String,

    pub database_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}
