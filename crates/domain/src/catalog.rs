//! Catalog — the persisted collection of services plus the merge and
//! query logic that governs it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::key::Key;
use crate::service::Service;
use crate::submission::Submission;
use crate::time::Timestamp;

/// Outcome of folding a submission into the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// A new service entry was created.
    Created,
    /// An existing entry gained area or locality data.
    Updated,
}

/// The whole directory document: insertion-ordered service entries.
///
/// Invariant: at most one service per case-insensitive name, and within a
/// service at most one area per case-insensitive city. Both are enforced
/// by routing every mutation through [`Catalog::apply`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub services: Vec<Service>,
}

impl Catalog {
    /// Fold a submission into the catalog.
    ///
    /// Scans by name key in insertion order; at most one entry can match
    /// since names are unique by construction. A miss creates a new entry,
    /// a hit delegates to [`Service::absorb`].
    pub fn apply(&mut self, submission: Submission, now: Timestamp) -> MergeOutcome {
        let key = Key::of(&submission.name);
        if let Some(service) = self.services.iter_mut().find(|svc| svc.name_key() == key) {
            service.absorb(submission, now);
            MergeOutcome::Updated
        } else {
            self.services.push(Service::from_submission(submission, now));
            MergeOutcome::Created
        }
    }

    /// Exact case-insensitive lookup by service name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Service> {
        let key = Key::of(name);
        self.services.iter().find(|svc| svc.name_key() == key)
    }

    /// Every service with at least one area in the given city.
    ///
    /// Results keep the catalog's insertion order.
    #[must_use]
    pub fn services_in_city(&self, city: &str) -> Vec<&Service> {
        let key = Key::of(city);
        self.services
            .iter()
            .filter(|svc| svc.areas.iter().any(|area| area.city_key() == key))
            .collect()
    }

    /// Distinct city display strings across all services.
    ///
    /// Deduplicated by comparison key with the first occurrence winning,
    /// trimmed for display, sorted case-insensitively.
    #[must_use]
    pub fn cities(&self) -> Vec<String> {
        let mut by_key: BTreeMap<Key, String> = BTreeMap::new();
        for service in &self.services {
            for area in &service.areas {
                by_key
                    .entry(area.city_key())
                    .or_insert_with(|| area.city.trim().to_string());
            }
        }
        by_key.into_values().collect()
    }
}
