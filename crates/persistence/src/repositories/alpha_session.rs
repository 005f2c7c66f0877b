//! Alpha session repository.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::entities::AlphaSessionEntity;
use crate::metrics::QueryTimer;

/// Repository for Alpha course sessions.
#[derive(Clone)]
pub struct AlphaSessionRepository {
    pool: PgPool,
}

impl AlphaSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The next session with open registration, if any. No current session
    /// simply hides the Alpha sections on the site.
    pub async fn find_current(
        &self,
        today: NaiveDate,
    ) -> Result<Option<AlphaSessionEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_current_alpha_session");
        let result = sqlx::query_as::<_, AlphaSessionEntity>(
            r#"
            SELECT id, season, start_date, end_date, meeting_day, meeting_time,
                   location, description, registration_open, registration_url,
                   max_capacity, current_count, created_at
            FROM alpha_sessions
            WHERE registration_open = true AND start_date >= $1
            ORDER BY start_date ASC
            LIMIT 1
            "#,
        )
        .bind(today)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}
