//! Shared application state for axum handlers.

use std::sync::Arc;

use citydir_app::ports::CatalogRepository;
use citydir_app::services::directory_service::DirectoryService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the repository itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Directory use-cases.
    pub directory: Arc<DirectoryService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
        }
    }
}

impl<R> AppState<R>
where
    R: CatalogRepository + Send + Sync + 'static,
{
    /// Create a new application state from the directory service.
    pub fn new(directory: DirectoryService<R>) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }
}
