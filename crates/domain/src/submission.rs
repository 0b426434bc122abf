//! Submission — the external input describing one city's worth of
//! information for a (possibly new) service.

use url::Url;

use crate::error::{DirectoryError, ValidationError};
use crate::service::{OperatingHours, PricingTier};

/// A validated, transient submission. Consumed by the catalog merge;
/// never persisted as its own entity.
#[derive(Debug, Clone)]
pub struct Submission {
    pub name: String,
    pub category: String,
    pub description: String,
    pub website: String,
    pub city: String,
    pub localities: Vec<String>,
    pub operating_hours: Option<OperatingHours>,
    pub pricing_tiers: Vec<PricingTier>,
    pub features: Vec<String>,
}

impl Submission {
    /// Create a builder for constructing a [`Submission`].
    #[must_use]
    pub fn builder() -> SubmissionBuilder {
        SubmissionBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] when name, category, or city
    /// is blank, or when the website does not parse as an absolute URL.
    pub fn validate(&self) -> Result<(), DirectoryError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory.into());
        }
        if self.city.trim().is_empty() {
            return Err(ValidationError::EmptyCity.into());
        }
        if Url::parse(&self.website).is_err() {
            return Err(ValidationError::InvalidWebsite.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Submission`].
#[derive(Debug, Default)]
pub struct SubmissionBuilder {
    name: Option<String>,
    category: Option<String>,
    description: Option<String>,
    website: Option<String>,
    city: Option<String>,
    localities: Vec<String>,
    operating_hours: Option<OperatingHours>,
    pricing_tiers: Vec<PricingTier>,
    features: Vec<String>,
}

impl SubmissionBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn localities(mut self, localities: Vec<String>) -> Self {
        self.localities = localities;
        self
    }

    #[must_use]
    pub fn operating_hours(mut self, hours: OperatingHours) -> Self {
        self.operating_hours = Some(hours);
        self
    }

    #[must_use]
    pub fn pricing_tiers(mut self, tiers: Vec<PricingTier>) -> Self {
        self.pricing_tiers = tiers;
        self
    }

    #[must_use]
    pub fn features(mut self, features: Vec<String>) -> Self {
        self.features = features;
        self
    }

    /// Consume the builder, validate, and return a [`Submission`].
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] if any invariant fails.
    pub fn build(self) -> Result<Submission, DirectoryError> {
        let submission = Submission {
            name: self.name.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            website: self.website.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            localities: self.localities,
            operating_hours: self.operating_hours,
            pricing_tiers: self.pricing_tiers,
            features: self.features,
        };
        submission.validate()?;
        Ok(submission)
    }
}
