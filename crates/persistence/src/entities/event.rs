//! Event entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use domain::models::Event;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the events table.
#[derive(Debug, Clone, FromRow)]
pub struct EventEntity {
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

impl From<EventEntity> for Event {
    fn from(entity: EventEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            start_date: entity.start_date,
            end_date: entity.end_date,
            location: entity.location,
            registration_open: entity.registration_open,
            registration_url: entity.registration_url,
            category: entity.category,
            featured: entity.featured,
            image_url: entity.image_url,
            created_at: entity.created_at,
        }
    }
}
