//! Support resource entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{SupportCategory, SupportResource};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum mapping for the PostgreSQL support_category type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "support_category", rename_all = "snake_case")]
pub enum SupportCategoryDb {
    StephenMinistry,
    CommunityCare,
    Financial,
    Counseling,
    Marriage,
    SupportGroups,
}

impl From<SupportCategoryDb> for SupportCategory {
    fn from(db: SupportCategoryDb) -> Self {
        match db {
            SupportCategoryDb::StephenMinistry => SupportCategory::StephenMinistry,
            SupportCategoryDb::CommunityCare => SupportCategory::CommunityCare,
            SupportCategoryDb::Financial => SupportCategory::Financial,
            SupportCategoryDb::Counseling => SupportCategory::Counseling,
            SupportCategoryDb::Marriage => SupportCategory::Marriage,
            SupportCategoryDb::SupportGroups => SupportCategory::SupportGroups,
        }
    }
}

impl From<SupportCategory> for SupportCategoryDb {
    fn from(cat: SupportCategory) -> Self {
        match cat {
            SupportCategory::StephenMinistry => SupportCategoryDb::StephenMinistry,
            SupportCategory::CommunityCare => SupportCategoryDb::CommunityCare,
            SupportCategory::Financial => SupportCategoryDb::Financial,
            SupportCategory::Counseling => SupportCategoryDb::Counseling,
            SupportCategory::Marriage => SupportCategoryDb::Marriage,
            SupportCategory::SupportGroups => SupportCategoryDb::SupportGroups,
        }
    }
}

/// Database row mapping for the support_resources table.
#[derive(Debug, Clone, FromRow)]
pub struct SupportResourceEntity {
    pub id: Uuid,
    pub title: String,
    pub category: SupportCategoryDb,
    pub description: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub url: Option<String>,
    pub sort_order: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<SupportResourceEntity> for SupportResource {
    fn from(entity: SupportResourceEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            category: entity.category.into(),
            description: entity.description,
            contact_name: entity.contact_name,
            contact_email: entity.contact_email,
            contact_phone: entity.contact_phone,
            url: entity.url,
            sort_order: entity.sort_order,
            active: entity.active,
            created_at: entity.created_at,
        }
    }
}
