//! Prayer request repository, the single write path of the site.

use sqlx::PgPool;

use crate::entities::PrayerRequestEntity;
use crate::metrics::QueryTimer;

/// Repository for submitted prayer requests.
#[derive(Clone)]
pub struct PrayerRequestRepository {
    pool: PgPool,
}

impl PrayerRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a validated submission and return the stored row.
    pub async fn create(
        &self,
        name: &str,
        email: Option<&str>,
        phone: Option<&str>,
        request: &str,
        is_public: bool,
    ) -> Result<PrayerRequestEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_prayer_request");
        let result = sqlx::query_as::<_, PrayerRequestEntity>(
            r#"
            INSERT INTO prayer_requests (name, email, phone, request, is_public)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, phone, request, is_public, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(request)
        .bind(is_public)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}
