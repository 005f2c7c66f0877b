//! Prayer request entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::PrayerRequest;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the prayer_requests table.
#[derive(Debug, Clone, FromRow)]
pub struct PrayerRequestEntity {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub request: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

impl From<PrayerRequestEntity> for PrayerRequest {
    fn from(entity: PrayerRequestEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            request: entity.request,
            is_public: entity.is_public,
            created_at: entity.created_at,
        }
    }
}
