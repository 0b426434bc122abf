//! Storage port — whole-document persistence for the catalog.

use std::future::Future;

use citydir_domain::catalog::Catalog;
use citydir_domain::error::DirectoryError;

/// Persistence boundary for the directory document.
///
/// The catalog is stored as a single document; implementations read and
/// replace it whole, with no caching between calls. A missing document
/// loads as an empty catalog.
pub trait CatalogRepository {
    /// Load the entire catalog.
    fn load(&self) -> impl Future<Output = Result<Catalog, DirectoryError>> + Send;

    /// Replace the entire persisted catalog.
    fn save(&self, catalog: Catalog) -> impl Future<Output = Result<(), DirectoryError>> + Send;
}
