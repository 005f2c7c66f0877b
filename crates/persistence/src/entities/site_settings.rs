//! Site settings entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{ServiceTime, SiteSettings};
use sqlx::FromRow;

/// Database row mapping for the site_settings table. Service times are
/// stored as a JSONB list and decoded on conversion; a malformed blob
/// degrades to an empty list rather than failing the page.
#[derive(Debug, Clone, FromRow)]
pub struct SiteSettingsEntity {
    pub id: String,
    pub service_times: serde_json::Value,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub live_stream_url: Option<String>,
    pub donation_url: Option<String>,
    pub youtube_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<SiteSettingsEntity> for SiteSettings {
    fn from(entity: SiteSettingsEntity) -> Self {
        let service_times: Vec<ServiceTime> =
            serde_json::from_value(entity.service_times).unwrap_or_default();
        Self {
            id: entity.id,
            service_times,
            address: entity.address,
            phone: entity.phone,
            email: entity.email,
            live_stream_url: entity.live_stream_url,
            donation_url: entity.donation_url,
            youtube_url: entity.youtube_url,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entity(service_times: serde_json::Value) -> SiteSettingsEntity {
        SiteSettingsEntity {
            id: "main".to_string(),
            service_times,
            address: "3560 Farm Hill Boulevard".to_string(),
            phone: "650-365-8094".to_string(),
            email: "info@example.org".to_string(),
            live_stream_url: None,
            donation_url: None,
            youtube_url: None,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn decodes_service_times() {
        let settings: SiteSettings = entity(json!([
            {"day": "Sunday", "times": ["9:00 AM", "10:45 AM"]}
        ]))
        .into();
        assert_eq!(settings.service_times.len(), 1);
        assert_eq!(settings.service_times[0].day, "Sunday");
        assert_eq!(settings.service_times[0].times.len(), 2);
    }

    #[test]
    fn malformed_service_times_degrade_to_empty() {
        let settings: SiteSettings = entity(json!({"oops": true})).into();
        assert!(settings.service_times.is_empty());
    }
}
