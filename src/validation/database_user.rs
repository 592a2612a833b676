use super::finding::ValidationResult;
use crate::models::AtlasDatabaseUser;

/// Database user specs carry no cross-field rules yet.
pub fn validate_database_user(_user: Option<&AtlasDatabaseUser>) -> ValidationResult {
    ValidationResult::new()
}
