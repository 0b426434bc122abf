//! Service — a directory entry for one business or offering.

use serde::{Deserialize, Serialize};

use crate::area::Area;
use crate::key::Key;
use crate::submission::Submission;
use crate::time::Timestamp;

/// Weekly operating hours, as displayed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHours {
    pub opens_at: String,
    pub closes_at: String,
    pub days: Vec<String>,
}

/// A named pricing tier with its displayed price range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub description: String,
    pub price_range: String,
}

/// A directory entry, uniquely identified by case-insensitive name.
///
/// Profile fields (category, description, website, hours, pricing,
/// features) are fixed at creation; later submissions under the same name
/// only extend the area and locality data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub category: String,
    pub description: String,
    pub website: String,
    pub areas: Vec<Area>,
    pub operating_hours: Option<OperatingHours>,
    pub pricing_tiers: Vec<PricingTier>,
    pub features: Vec<String>,
    pub is_verified: bool,
    pub verified_at: Option<Timestamp>,
    pub rating: f64,
    pub total_ratings: u32,
    pub review_count: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Service {
    /// Create a fresh entry from a validated submission.
    ///
    /// Verification flags start false and rating counters at zero; the
    /// submission's city becomes the single initial area.
    #[must_use]
    pub fn from_submission(submission: Submission, now: Timestamp) -> Self {
        Self {
            name: submission.name,
            category: submission.category,
            description: submission.description,
            website: submission.website,
            areas: vec![Area::new(submission.city, submission.localities)],
            operating_hours: submission.operating_hours,
            pricing_tiers: submission.pricing_tiers,
            features: submission.features,
            is_verified: false,
            verified_at: None,
            rating: 0.0,
            total_ratings: 0,
            review_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Comparison key of the service name.
    #[must_use]
    pub fn name_key(&self) -> Key {
        Key::of(&self.name)
    }

    /// This service's area for a city, matched case-insensitively.
    #[must_use]
    pub fn area_for_city(&self, city: &str) -> Option<&Area> {
        let key = Key::of(city);
        self.areas.iter().find(|area| area.city_key() == key)
    }

    fn area_for_city_mut(&mut self, city: &str) -> Option<&mut Area> {
        let key = Key::of(city);
        self.areas.iter_mut().find(|area| area.city_key() == key)
    }

    /// Fold one more city's worth of data into this entry.
    ///
    /// Extends the matching area's locality set, or appends a new
    /// unverified area when the city is new to this service. Profile
    /// fields stay as they were at creation; `updated_at` advances in
    /// both branches.
    pub fn absorb(&mut self, submission: Submission, now: Timestamp) {
        if let Some(area) = self.area_for_city_mut(&submission.city) {
            area.extend_localities(submission.localities);
        } else {
            self.areas
                .push(Area::new(submission.city, submission.localities));
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::now;

    fn submission(city: &str, localities: &[&str]) -> Submission {
        Submission::builder()
            .name("Acme Tutors")
            .category("Education")
            .description("Private tutoring")
            .website("https://acme.example")
            .city(city)
            .localities(localities.iter().map(ToString::to_string).collect())
            .build()
            .unwrap()
    }

    #[test]
    fn should_create_entry_with_single_area_and_zeroed_counters() {
        let service = Service::from_submission(submission("Delhi", &["Dwarka"]), now());
        assert_eq!(service.areas.len(), 1);
        assert_eq!(service.areas[0].city, "Delhi");
        assert_eq!(service.areas[0].localities, vec!["Dwarka"]);
        assert!(!service.is_verified);
        assert!(service.verified_at.is_none());
        assert!(service.rating.abs() < f64::EPSILON);
        assert_eq!(service.total_ratings, 0);
        assert_eq!(service.review_count, 0);
        assert_eq!(service.created_at, service.updated_at);
    }

    #[test]
    fn should_extend_existing_area_when_city_matches_case_insensitively() {
        let mut service = Service::from_submission(submission("Delhi", &["Dwarka"]), now());
        service.absorb(submission(" DELHI ", &["Rohini"]), now());

        assert_eq!(service.areas.len(), 1);
        assert_eq!(service.areas[0].localities, vec!["Dwarka", "Rohini"]);
    }

    #[test]
    fn should_append_new_unverified_area_for_new_city() {
        let mut service = Service::from_submission(submission("Delhi", &["Dwarka"]), now());
        service.absorb(submission("Mumbai", &[]), now());

        assert_eq!(service.areas.len(), 2);
        assert_eq!(service.areas[1].city, "Mumbai");
        assert!(service.areas[1].localities.is_empty());
        assert!(!service.areas[1].is_verified);
    }

    #[test]
    fn should_keep_profile_fields_on_absorb() {
        let mut service = Service::from_submission(submission("Delhi", &[]), now());
        let other = Submission::builder()
            .name("Acme Tutors")
            .category("Coaching")
            .description("Different description")
            .website("https://other.example")
            .city("Mumbai")
            .build()
            .unwrap();
        service.absorb(other, now());

        assert_eq!(service.category, "Education");
        assert_eq!(service.description, "Private tutoring");
        assert_eq!(service.website, "https://acme.example");
    }

    #[test]
    fn should_advance_updated_at_on_absorb() {
        let created = now();
        let mut service = Service::from_submission(submission("Delhi", &[]), created);
        let later = now();
        service.absorb(submission("Delhi", &[]), later);

        assert_eq!(service.created_at, created);
        assert_eq!(service.updated_at, later);
    }

    #[test]
    fn should_find_area_for_any_case_variant() {
        let service = Service::from_submission(submission("Delhi", &["Dwarka"]), now());
        assert!(service.area_for_city("delhi").is_some());
        assert!(service.area_for_city(" DELHI ").is_some());
        assert!(service.area_for_city("Mumbai").is_none());
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let service = Service::from_submission(submission("Delhi", &["Dwarka"]), now());
        let json = serde_json::to_string(&service).unwrap();
        let parsed: Service = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, service.name);
        assert_eq!(parsed.areas, service.areas);
        assert_eq!(parsed.created_at, service.created_at);
    }
}
