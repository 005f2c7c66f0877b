//! Event repository.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::entities::EventEntity;
use crate::metrics::QueryTimer;

const EVENT_COLUMNS: &str = "id, title, description, start_date, end_date, location, \
     registration_open, registration_url, category, featured, image_url, created_at";

/// Repository for the events calendar.
#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Upcoming events for the home page: featured first, then soonest.
    pub async fn find_upcoming(
        &self,
        today: NaiveDate,
        limit: i64,
    ) -> Result<Vec<EventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_upcoming_events");
        let result = sqlx::query_as::<_, EventEntity>(&format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE start_date >= $1
            ORDER BY featured DESC, start_date ASC
            LIMIT $2
            "#
        ))
        .bind(today)
        .bind(limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// All events, optionally narrowed to one category, soonest first.
    pub async fn find_all(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<EventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_events");
        let result = sqlx::query_as::<_, EventEntity>(&format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE ($1::text IS NULL OR category = $1)
            ORDER BY start_date ASC
            "#
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
