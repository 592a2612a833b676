use super::finding::ValidationResult;
use crate::models::AtlasProject;

/// Project specs carry no cross-field rules yet.
pub fn validate_project(_project: Option<&AtlasProject>) -> ValidationResult {
    ValidationResult::new()
}
