//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for `created_at`, `updated_at`, and verification dates.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_time_between_surrounding_calls() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(before <= ts && ts <= after);
    }
}
