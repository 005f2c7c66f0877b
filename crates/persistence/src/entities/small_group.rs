//! Small group entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{SmallGroup, SmallGroupKind};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum mapping for the PostgreSQL small_group_kind type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "small_group_kind", rename_all = "lowercase")]
pub enum SmallGroupKindDb {
    Growth,
    Life,
}

impl From<SmallGroupKindDb> for SmallGroupKind {
    fn from(db: SmallGroupKindDb) -> Self {
        match db {
            SmallGroupKindDb::Growth => SmallGroupKind::Growth,
            SmallGroupKindDb::Life => SmallGroupKind::Life,
        }
    }
}

impl From<SmallGroupKind> for SmallGroupKindDb {
    fn from(kind: SmallGroupKind) -> Self {
        match kind {
            SmallGroupKind::Growth => SmallGroupKindDb::Growth,
            SmallGroupKind::Life => SmallGroupKindDb::Life,
        }
    }
}

/// Database row mapping for the small_groups table.
#[derive(Debug, Clone, FromRow)]
pub struct SmallGroupEntity {
    pub id: Uuid,
    pub name: String,
    pub kind: SmallGroupKindDb,
    pub description: String,
    pub leader: Option<String>,
    pub meeting_day: Option<String>,
    pub meeting_time: Option<String>,
    pub location: Option<String>,
    pub max_capacity: Option<i32>,
    pub current_count: i32,
    pub open_for_signup: bool,
    pub contact_email: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<SmallGroupEntity> for SmallGroup {
    fn from(entity: SmallGroupEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            kind: entity.kind.into(),
            description: entity.description,
            leader: entity.leader,
            meeting_day: entity.meeting_day,
            meeting_time: entity.meeting_time,
            location: entity.location,
            max_capacity: entity.max_capacity,
            current_count: entity.current_count,
            open_for_signup: entity.open_for_signup,
            contact_email: entity.contact_email,
            active: entity.active,
            created_at: entity.created_at,
        }
    }
}
