//! Staff member repository.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::StaffMemberEntity;
use crate::metrics::QueryTimer;

const STAFF_COLUMNS: &str = "id, name, role, department, email, phone, bio, image_url, \
     leadership, active, sort_order, created_at";

/// Repository for the staff directory and leadership page.
#[derive(Clone)]
pub struct StaffMemberRepository {
    pool: PgPool,
}

impl StaffMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All active staff, optionally narrowed to one department.
    pub async fn find_active(
        &self,
        department: Option<&str>,
    ) -> Result<Vec<StaffMemberEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_active_staff");
        let result = sqlx::query_as::<_, StaffMemberEntity>(&format!(
            r#"
            SELECT {STAFF_COLUMNS}
            FROM staff_members
            WHERE active = true AND ($1::text IS NULL OR department = $1)
            ORDER BY sort_order ASC
            "#
        ))
        .bind(department)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// The leadership team subset, in display order.
    pub async fn find_leadership(&self) -> Result<Vec<StaffMemberEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_leadership_team");
        let result = sqlx::query_as::<_, StaffMemberEntity>(&format!(
            r#"
            SELECT {STAFF_COLUMNS}
            FROM staff_members
            WHERE active = true AND leadership = true
            ORDER BY sort_order ASC
            "#
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<StaffMemberEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_staff_member_by_id");
        let result = sqlx::query_as::<_, StaffMemberEntity>(&format!(
            "SELECT {STAFF_COLUMNS} FROM staff_members WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}
