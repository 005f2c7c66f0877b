//! Alpha course session models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled offering of the Alpha course, with capacity tracking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AlphaSession {
    pub id: Uuid,
    pub season: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub meeting_day: String,
    pub meeting_time: String,
    pub location: String,
    pub description: String,
    pub registration_open: bool,
    pub registration_url: Option<String>,
    pub max_capacity: i32,
    pub current_count: i32,
    pub created_at: DateTime<Utc>,
}

impl AlphaSession {
    /// Seats still available. Never negative, even if the counters are
    /// out of sync upstream.
    pub fn spots_remaining(&self) -> i32 {
        (self.max_capacity - self.current_count).max(0)
    }

    /// True when the session has open registration and seats left.
    pub fn accepting_signups(&self) -> bool {
        self.registration_open && self.spots_remaining() > 0
    }
}
