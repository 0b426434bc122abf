//! # citydir-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API (`/cities`, `/services/{city}`,
//!   `/services/by-name/{name}`, `/submit-service`)
//! - Validate request bodies into domain submissions (driving adapter)
//! - Map application results and errors into HTTP responses
//! - Apply permissive CORS and per-request tracing layers
//!
//! ## Dependency rule
//! Depends on `citydir-app` (for the port trait and service) and
//! `citydir-domain` (for types used in request/response mapping). Never
//! leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
