//! Storage-specific error type wrapping filesystem and JSON errors.

use citydir_domain::error::DirectoryError;

/// Errors originating from the JSON document store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or replacing the document failed.
    #[error("document IO error")]
    Io(#[from] std::io::Error),

    /// The persisted document does not match the catalog schema.
    #[error("document JSON error")]
    Json(#[from] serde_json::Error),
}

impl From<StorageError> for DirectoryError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
