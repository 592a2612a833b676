pub mod cluster;
pub mod database_user;
pub mod display;
pub mod project;
pub mod resource;
mod serde_helpers;

// Re-export commonly used types
pub use cluster::{
    AdvancedClusterSpec, AtlasCluster, AtlasClusterSpec, ClusterDeployment, ClusterSpec,
    ProviderSettings, SERVERLESS_PROVIDER, ServerlessSpec,
};
pub use database_user::{AtlasDatabaseUser, AtlasDatabaseUserSpec};
pub use project::{AtlasProject, AtlasProjectSpec};
pub use resource::{ObjectMeta, Resource};

#[cfg(test)]
mod tests;
