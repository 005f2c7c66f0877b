//! Event models for the events calendar and home page highlights.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled church event. Registration happens on an external platform;
/// `registration_url` is an opaque link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub location: String,
    pub registration_open: bool,
    pub registration_url: Option<String>,
    pub category: String,
    pub featured: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// True when the event spans more than a single day.
    pub fn is_multi_day(&self) -> bool {
        self.end_date.map(|end| end > self.start_date).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(start: NaiveDate, end: Option<NaiveDate>) -> Event {
        Event {
            id: Uuid::new_v4(),
            title: "Alpha Spring".to_string(),
            description: "A series of conversations".to_string(),
            start_date: start,
            end_date: end,
            location: "Community Center".to_string(),
            registration_open: true,
            registration_url: None,
            category: "alpha".to_string(),
            featured: false,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn multi_day_requires_later_end_date() {
        let day = NaiveDate::from_ymd_opt(2026, 2, 24).unwrap();
        assert!(!event(day, None).is_multi_day());
        assert!(!event(day, Some(day)).is_multi_day());
        assert!(event(day, day.succ_opt()).is_multi_day());
    }
}
