//! Site-wide settings (singleton record maintained by the seed process).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A weekly service slot, e.g. Sunday at 9:00 AM and 10:45 AM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServiceTime {
    pub day: String,
    pub times: Vec<String>,
}

/// Singleton site settings row. Every field is display data; the application
/// never writes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SiteSettings {
    pub id: String,
    pub service_times: Vec<ServiceTime>,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub live_stream_url: Option<String>,
    pub donation_url: Option<String>,
    pub youtube_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_times_round_trip_json() {
        let times = vec![ServiceTime {
            day: "Sunday".to_string(),
            times: vec!["9:00 AM".to_string(), "10:45 AM".to_string()],
        }];
        let json = serde_json::to_string(&times).unwrap();
        let parsed: Vec<ServiceTime> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, times);
    }
}
