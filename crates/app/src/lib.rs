//! # citydir-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **storage port** that adapters must implement:
//!   - `CatalogRepository` — load & replace the whole directory document
//! - Define the use-cases as a service struct:
//!   - `DirectoryService` — submit, query by city, list cities, lookup by name
//! - Serialize submissions through a single writer lock
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `citydir-domain` only (plus `tokio::sync` for the writer
//! lock). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.

pub mod ports;
pub mod services;
