//! Area — one city's worth of presence for a service.

use serde::{Deserialize, Serialize};

use crate::key::Key;
use crate::time::Timestamp;

/// A city-level presence of a service, with its locality tags.
///
/// Localities are stored with their first-seen casing and deduplicated
/// case-insensitively; membership tests fold case the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub city: String,
    pub localities: Vec<String>,
    pub is_verified: bool,
    pub verified_at: Option<Timestamp>,
    pub coverage_note: Option<String>,
}

impl Area {
    /// Create an unverified area from a submitted city and locality list.
    #[must_use]
    pub fn new(city: impl Into<String>, localities: impl IntoIterator<Item = String>) -> Self {
        let mut area = Self {
            city: city.into(),
            localities: Vec::new(),
            is_verified: false,
            verified_at: None,
            coverage_note: None,
        };
        area.extend_localities(localities);
        area
    }

    /// Comparison key of the city name.
    #[must_use]
    pub fn city_key(&self) -> Key {
        Key::of(&self.city)
    }

    /// Union the locality set with `incoming`.
    ///
    /// Entries already present under a case-insensitive comparison are
    /// skipped, as are blank strings. Insertion order is stable. Returns
    /// how many localities were added.
    pub fn extend_localities(&mut self, incoming: impl IntoIterator<Item = String>) -> usize {
        let mut added = 0;
        for locality in incoming {
            let trimmed = locality.trim();
            if trimmed.is_empty() || self.has_locality(trimmed) {
                continue;
            }
            self.localities.push(trimmed.to_string());
            added += 1;
        }
        added
    }

    /// Case-insensitive membership test for a locality.
    #[must_use]
    pub fn has_locality(&self, locality: &str) -> bool {
        let key = Key::of(locality);
        self.localities.iter().any(|known| Key::of(known) == key)
    }
}
