//! Ministry entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{Ministry, MinistryCategory};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum mapping for the PostgreSQL ministry_category type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "ministry_category", rename_all = "lowercase")]
pub enum MinistryCategoryDb {
    Outreach,
    Kids,
    Youth,
    Adults,
    Worship,
}

impl From<MinistryCategoryDb> for MinistryCategory {
    fn from(db: MinistryCategoryDb) -> Self {
        match db {
            MinistryCategoryDb::Outreach => MinistryCategory::Outreach,
            MinistryCategoryDb::Kids => MinistryCategory::Kids,
            MinistryCategoryDb::Youth => MinistryCategory::Youth,
            MinistryCategoryDb::Adults => MinistryCategory::Adults,
            MinistryCategoryDb::Worship => MinistryCategory::Worship,
        }
    }
}

impl From<MinistryCategory> for MinistryCategoryDb {
    fn from(cat: MinistryCategory) -> Self {
        match cat {
            MinistryCategory::Outreach => MinistryCategoryDb::Outreach,
            MinistryCategory::Kids => MinistryCategoryDb::Kids,
            MinistryCategory::Youth => MinistryCategoryDb::Youth,
            MinistryCategory::Adults => MinistryCategoryDb::Adults,
            MinistryCategory::Worship => MinistryCategoryDb::Worship,
        }
    }
}

/// Database row mapping for the ministries table.
#[derive(Debug, Clone, FromRow)]
pub struct MinistryEntity {
    pub id: Uuid,
    pub name: String,
    pub category: MinistryCategoryDb,
    pub description: String,
    pub leader: Option<String>,
    pub meeting_info: Option<String>,
    pub sort_order: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<MinistryEntity> for Ministry {
    fn from(entity: MinistryEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            category: entity.category.into(),
            description: entity.description,
            leader: entity.leader,
            meeting_info: entity.meeting_info,
            sort_order: entity.sort_order,
            active: entity.active,
            created_at: entity.created_at,
        }
    }
}
