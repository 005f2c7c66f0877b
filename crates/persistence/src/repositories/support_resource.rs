//! Support resource repository.

use sqlx::PgPool;

use crate::entities::{SupportCategoryDb, SupportResourceEntity};
use crate::metrics::QueryTimer;

const RESOURCE_COLUMNS: &str = "id, title, category, description, contact_name, contact_email, \
     contact_phone, url, sort_order, active, created_at";

/// Repository for pastoral/practical care resources.
#[derive(Clone)]
pub struct SupportResourceRepository {
    pool: PgPool,
}

impl SupportResourceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All active resources in display order.
    pub async fn find_active(&self) -> Result<Vec<SupportResourceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_active_support_resources");
        let result = sqlx::query_as::<_, SupportResourceEntity>(&format!(
            r#"
            SELECT {RESOURCE_COLUMNS}
            FROM support_resources
            WHERE active = true
            ORDER BY sort_order ASC
            "#
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Active resources within one care category.
    pub async fn find_by_category(
        &self,
        category: SupportCategoryDb,
    ) -> Result<Vec<SupportResourceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_support_resources_by_category");
        let result = sqlx::query_as::<_, SupportResourceEntity>(&format!(
            r#"
            SELECT {RESOURCE_COLUMNS}
            FROM support_resources
            WHERE active = true AND category = $1
            ORDER BY sort_order ASC
            "#
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
