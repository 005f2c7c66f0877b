//! Staff member entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::StaffMember;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the staff_members table.
#[derive(Debug, Clone, FromRow)]
pub struct StaffMemberEntity {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub department: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub leadership: bool,
    pub active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<StaffMemberEntity> for StaffMember {
    fn from(entity: StaffMemberEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            role: entity.role,
            department: entity.department,
            email: entity.email,
            phone: entity.phone,
            bio: entity.bio,
            image_url: entity.image_url,
            leadership: entity.leadership,
            active: entity.active,
            sort_order: entity.sort_order,
            created_at: entity.created_at,
        }
    }
}
