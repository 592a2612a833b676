use tracing::debug;

use super::finding::{Finding, FindingKind, ValidationResult};
use super::presence::{Presence, all_absent, more_than_one_present};
use crate::models::AtlasClusterSpec;

pub const NO_VARIANT_MESSAGE: &str = "expected exactly one of spec.clusterSpec, spec.advancedClusterSpec, or spec.serverlessSpec to be present, but none were";
pub const MULTIPLE_VARIANTS_MESSAGE: &str = "expected exactly one of spec.clusterSpec, spec.advancedClusterSpec, or spec.serverlessSpec, more than one were present";
pub const INSTANCE_SIZE_REQUIRED_MESSAGE: &str =
    "must specify instanceSizeName if provider name is not SERVERLESS";
pub const INSTANCE_SIZE_FORBIDDEN_MESSAGE: &str =
    "must not specify instanceSizeName if provider name is SERVERLESS";

const SPEC_PATH: &str = "/spec";
const INSTANCE_SIZE_PATH: &str = "/spec/clusterSpec/providerSettings/instanceSizeName";

/// Checks the variant slots and the basic shape's provider settings.
///
/// Every rule is evaluated; findings come back in rule order.
pub fn validate_cluster_spec(spec: &AtlasClusterSpec) -> ValidationResult {
    let mut result = ValidationResult::new();
    let slots: [&dyn Presence; 3] = [
        &spec.cluster_spec,
        &spec.advanced_cluster_spec,
        &spec.serverless_spec,
    ];

    if all_absent(&slots) {
        result.push(Finding::new(
            FindingKind::NoVariantPresent,
            SPEC_PATH,
            NO_VARIANT_MESSAGE,
        ));
    }

    if more_than_one_present(&slots) {
        result.push(Finding::new(
            FindingKind::MultipleVariantsPresent,
            SPEC_PATH,
            MULTIPLE_VARIANTS_MESSAGE,
        ));
    }

    if let Some(settings) = spec
        .cluster_spec
        .as_ref()
        .and_then(|basic| basic.provider_settings.as_ref())
    {
        let has_size = !settings.instance_size_name.is_empty();
        let serverless = settings.is_serverless();

        // Two separate checks, not an else-if.
        if !has_size && !serverless {
            result.push(Finding::new(
                FindingKind::InstanceSizeRequired,
                INSTANCE_SIZE_PATH,
                INSTANCE_SIZE_REQUIRED_MESSAGE,
            ));
        }
        if has_size && serverless {
            result.push(Finding::new(
                FindingKind::InstanceSizeForbidden,
                INSTANCE_SIZE_PATH,
                INSTANCE_SIZE_FORBIDDEN_MESSAGE,
            ));
        }
    }

    debug!("cluster spec produced {} finding(s)", result.len());
    result
}
