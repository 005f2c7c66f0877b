//! Site settings repository.

use sqlx::PgPool;

use crate::entities::SiteSettingsEntity;
use crate::metrics::QueryTimer;

/// Repository for the singleton site settings row.
#[derive(Clone)]
pub struct SiteSettingsRepository {
    pool: PgPool,
}

impl SiteSettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the settings row. A missing row is not an error; pages
    /// degrade by omitting the affected sections.
    pub async fn find(&self) -> Result<Option<SiteSettingsEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_site_settings");
        let result = sqlx::query_as::<_, SiteSettingsEntity>(
            r#"
            SELECT id, service_times, address, phone, email,
                   live_stream_url, donation_url, youtube_url, updated_at
            FROM site_settings
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}
