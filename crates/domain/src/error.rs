//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`DirectoryError`] via `From`. Adapters wrap their concrete error behind
//! the boxed `Storage` variant so this crate never names an IO type.

/// Top-level error for the directory core.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// A domain invariant was violated by input data.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A lookup matched nothing.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Violations of domain invariants on submitted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The service name is empty after trimming.
    #[error("name must not be empty")]
    EmptyName,

    /// The category is empty after trimming.
    #[error("category must not be empty")]
    EmptyCategory,

    /// The city is empty after trimming.
    #[error("city must not be empty")]
    EmptyCity,

    /// The website does not parse as an absolute URL.
    #[error("website is not a valid URL")]
    InvalidWebsite,
}

/// A lookup that matched no record.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found: {key}")]
pub struct NotFoundError {
    /// What kind of record was looked up.
    pub entity: &'static str,
    /// The lookup key as given by the caller.
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_directory_error() {
        let err: DirectoryError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            DirectoryError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_render_not_found_with_entity_and_key() {
        let err = NotFoundError {
            entity: "Service",
            key: "Acme Tutors".to_string(),
        };
        assert_eq!(err.to_string(), "Service not found: Acme Tutors");
    }
}
