//! Ministry repository.

use sqlx::PgPool;

use crate::entities::MinistryEntity;
use crate::metrics::QueryTimer;

/// Repository for ministry listings.
#[derive(Clone)]
pub struct MinistryRepository {
    pool: PgPool,
}

impl MinistryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Active ministries in display order.
    pub async fn find_active(&self) -> Result<Vec<MinistryEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_active_ministries");
        let result = sqlx::query_as::<_, MinistryEntity>(
            r#"
            SELECT id, name, category, description, leader, meeting_info,
                   sort_order, active, created_at
            FROM ministries
            WHERE active = true
            ORDER BY sort_order ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
