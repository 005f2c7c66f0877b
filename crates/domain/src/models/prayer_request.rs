//! Prayer request models for the one write the public site performs.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

lazy_static! {
    /// Loose phone format: digits with optional separators and country code.
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9][0-9 .\-()]{6,19}$").unwrap();
}

/// A stored prayer request. `is_public` controls whether the request may be
/// shared beyond the prayer team.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PrayerRequest {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub request: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

/// Submission payload for the prayer form.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreatePrayerRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,

    #[validate(regex(path = *PHONE_REGEX, message = "Phone must be a valid phone number"))]
    pub phone: Option<String>,

    #[validate(length(
        min = 1,
        max = 2000,
        message = "Request must be between 1 and 2000 characters"
    ))]
    pub request: String,

    #[serde(default)]
    pub is_public: bool,
}
