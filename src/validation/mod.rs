//! Semantic validation of Atlas resource specs.
//!
//! Validators are pure: they take a decoded spec and return every finding
//! they can detect. Decoding and structural checks live in the loader.

mod cluster;
mod database_user;
pub mod error_reporter;
mod finding;
pub mod presence;
mod project;
mod schemas;
mod structure;


pub use cluster::{
    INSTANCE_SIZE_FORBIDDEN_MESSAGE, INSTANCE_SIZE_REQUIRED_MESSAGE, MULTIPLE_VARIANTS_MESSAGE,
    NO_VARIANT_MESSAGE, validate_cluster_spec,
};
pub use database_user::validate_database_user;
pub use error_reporter::{ManifestError, SpannedDocument};
pub use finding::{Finding, FindingKind, ValidationErrors, ValidationResult};
pub use project::validate_project;
pub use structure::StructureValidator;

use crate::models::Resource;

/// Runs the validator matching the resource's kind.
pub fn validate_resource(resource: &Resource) -> ValidationResult {
    match resource {
        Resource::Cluster(cluster) => validate_cluster_spec(&cluster.spec),
        Resource::Project(project) => validate_project(Some(project)),
        Resource::DatabaseUser(user) => validate_database_user(Some(user)),
    }
}
