//! Alpha session entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use domain::models::AlphaSession;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the alpha_sessions table.
#[derive(Debug, Clone, FromRow)]
pub struct AlphaSessionEntity {
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

impl From<AlphaSessionEntity> for AlphaSession {
    fn from(entity: AlphaSessionEntity) -> Self {
        Self {
            id: entity.id,
            season: entity.season,
            start_date: entity.start_date,
            end_date: entity.end_date,
            meeting_day: entity.meeting_day,
            meeting_time: entity.meeting_time,
            location: entity.location,
            description: entity.description,
            registration_open: entity.registration_open,
            registration_url: entity.registration_url,
            max_capacity: entity.max_capacity,
            current_count: entity.current_count,
            created_at: entity.created_at,
        }
    }
}
