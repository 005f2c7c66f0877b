//! Small group repository.

use sqlx::PgPool;

use crate::entities::{SmallGroupEntity, SmallGroupKindDb};
use crate::metrics::QueryTimer;

const GROUP_COLUMNS: &str = "id, name, kind, description, leader, meeting_day, meeting_time, \
     location, max_capacity, current_count, open_for_signup, contact_email, active, created_at";

/// Repository for growth and life groups.
#[derive(Clone)]
pub struct SmallGroupRepository {
    pool: PgPool,
}

impl SmallGroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All active groups, growth groups before life groups.
    pub async fn find_active(&self) -> Result<Vec<SmallGroupEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_active_small_groups");
        let result = sqlx::query_as::<_, SmallGroupEntity>(&format!(
            r#"
            SELECT {GROUP_COLUMNS}
            FROM small_groups
            WHERE active = true
            ORDER BY kind ASC, name ASC
            "#
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Active groups of one kind.
    pub async fn find_by_kind(
        &self,
        kind: SmallGroupKindDb,
    ) -> Result<Vec<SmallGroupEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_small_groups_by_kind");
        let result = sqlx::query_as::<_, SmallGroupEntity>(&format!(
            r#"
            SELECT {GROUP_COLUMNS}
            FROM small_groups
            WHERE active = true AND kind = $1
            ORDER BY name ASC
            "#
        ))
        .bind(kind)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Active groups currently accepting signups.
    pub async fn find_open(&self) -> Result<Vec<SmallGroupEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_open_small_groups");
        let result = sqlx::query_as::<_, SmallGroupEntity>(&format!(
            r#"
            SELECT {GROUP_COLUMNS}
            FROM small_groups
            WHERE active = true AND open_for_signup = true
            ORDER BY kind ASC, name ASC
            "#
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
