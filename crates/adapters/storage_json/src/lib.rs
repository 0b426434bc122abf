//! # citydir-adapter-storage-json
//!
//! JSON document persistence adapter using `tokio::fs`.
//!
//! ## Responsibilities
//! - Implement the `CatalogRepository` port defined in `citydir-app`
//! - Read and replace the directory document as one pretty-printed JSON file
//! - Treat a missing file as an empty catalog; fail fast on malformed JSON
//! - Replace atomically via a sibling temp file and rename
//!
//! ## Dependency rule
//! Depends on `citydir-app` (for the port trait) and `citydir-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod error;
pub mod repo;

pub use error::StorageError;
pub use repo::JsonCatalogRepository;
