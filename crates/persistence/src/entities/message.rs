//! Message entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use domain::models::Message;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the messages table.
#[derive(Debug, Clone, FromRow)]
pub struct MessageEntity {
    pub id: Uuid,
    pub title: String,
    pub speaker: String,
    pub date: NaiveDate,
    pub series: Option<String>,
    pub scripture: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub audio_url: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<MessageEntity> for Message {
    fn from(entity: MessageEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            speaker: entity.speaker,
            date: entity.date,
            series: entity.series,
            scripture: entity.scripture,
            description: entity.description,
            thumbnail_url: entity.thumbnail_url,
            video_url: entity.video_url,
            audio_url: entity.audio_url,
            tags: entity.tags,
            created_at: entity.created_at,
        }
    }
}
