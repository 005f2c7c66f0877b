//! Message repository for the sermon archive.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::MessageEntity;
use crate::metrics::QueryTimer;

const MESSAGE_COLUMNS: &str = "id, title, speaker, date, series, scripture, description, \
     thumbnail_url, video_url, audio_url, tags, created_at";

/// Repository for sermon archive reads.
#[derive(Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The most recent messages, newest first.
    pub async fn find_latest(&self, limit: i64) -> Result<Vec<MessageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_latest_messages");
        let result = sqlx::query_as::<_, MessageEntity>(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages ORDER BY date DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<MessageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_message_by_id");
        let result = sqlx::query_as::<_, MessageEntity>(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// The full archive, newest first, optionally narrowed by series and/or
    /// speaker (the two filter selects on the archive page).
    pub async fn find_all(
        &self,
        series: Option<&str>,
        speaker: Option<&str>,
    ) -> Result<Vec<MessageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_messages");
        let result = sqlx::query_as::<_, MessageEntity>(&format!(
            r#"
            SELECT {MESSAGE_COLUMNS}
            FROM messages
            WHERE ($1::text IS NULL OR series = $1)
              AND ($2::text IS NULL OR speaker = $2)
            ORDER BY date DESC
            "#
        ))
        .bind(series)
        .bind(speaker)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Other messages in the same series, newest first.
    pub async fn find_by_series(
        &self,
        series: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<Vec<MessageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_messages_by_series");
        let result = sqlx::query_as::<_, MessageEntity>(&format!(
            r#"
            SELECT {MESSAGE_COLUMNS}
            FROM messages
            WHERE series = $1 AND ($2::uuid IS NULL OR id <> $2)
            ORDER BY date DESC
            "#
        ))
        .bind(series)
        .bind(exclude_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Distinct series names, most recently preached first.
    pub async fn distinct_series(&self) -> Result<Vec<String>, sqlx::Error> {
        let timer = QueryTimer::new("distinct_message_series");
        let result = sqlx::query_scalar::<_, String>(
            r#"
            SELECT series FROM messages
            WHERE series IS NOT NULL
            GROUP BY series
            ORDER BY MAX(date) DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Distinct speaker names, alphabetical.
    pub async fn distinct_speakers(&self) -> Result<Vec<String>, sqlx::Error> {
        let timer = QueryTimer::new("distinct_message_speakers");
        let result = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT speaker FROM messages ORDER BY speaker ASC",
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
