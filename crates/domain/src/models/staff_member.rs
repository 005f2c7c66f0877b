//! Staff and leadership models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A staff member profile. `leadership` marks members shown on the
/// leadership team page in addition to the full staff directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StaffMember {
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
