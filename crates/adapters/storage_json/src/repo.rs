//! JSON file implementation of [`CatalogRepository`].

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use citydir_app::ports::CatalogRepository;
use citydir_domain::catalog::Catalog;
use citydir_domain::error::DirectoryError;

use crate::error::StorageError;

/// File-backed catalog repository storing one pretty-printed JSON document.
///
/// Every call hits the filesystem; nothing is cached between requests.
pub struct JsonCatalogRepository {
    path: PathBuf,
}

impl JsonCatalogRepository {
    /// Create a repository persisting to the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The document path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogRepository for JsonCatalogRepository {
    fn load(&self) -> impl Future<Output = Result<Catalog, DirectoryError>> + Send {
        let path = self.path.clone();
        async move {
            match tokio::fs::read(&path).await {
                Ok(bytes) => {
                    let catalog = serde_json::from_slice(&bytes).map_err(StorageError::from)?;
                    Ok(catalog)
                }
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(Catalog::default()),
                Err(err) => Err(StorageError::from(err).into()),
            }
        }
    }

    fn save(&self, catalog: Catalog) -> impl Future<Output = Result<(), DirectoryError>> + Send {
        let path = self.path.clone();
        async move {
            let json = serde_json::to_vec_pretty(&catalog).map_err(StorageError::from)?;

            // The temp file must live next to the target so the rename
            // stays on one filesystem.
            let tmp = tmp_path(&path);
            tokio::fs::write(&tmp, &json)
                .await
                .map_err(StorageError::from)?;
            tokio::fs::rename(&tmp, &path)
                .await
                .map_err(StorageError::from)?;
            Ok(())
        }
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map_or_else(
        || std::ffi::OsString::from("catalog"),
        std::ffi::OsStr::to_os_string,
    );
    name.push(".tmp");
    path.with_file_name(name)
}
