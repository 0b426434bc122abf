//! # citydir-domain
//!
//! Pure domain model for the citydir service directory.
//!
//! ## Responsibilities
//! - Foundational types: normalized comparison keys, error conventions, timestamps
//! - Define **Services** (directory entries identified by case-insensitive name)
//! - Define **Areas** (a service's per-city presence with its locality tags)
//! - Define **Submissions** (validated external input for one city)
//! - Define the **Catalog** (the persisted collection plus merge and query logic)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod key;
pub mod time;

pub mod area;
pub mod catalog;
pub mod service;
pub mod submission;
