//! Small group models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Small group classification: short-term topical groups vs. ongoing
/// community groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmallGroupKind {
    Growth,
    Life,
}

impl SmallGroupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SmallGroupKind::Growth => "growth",
            SmallGroupKind::Life => "life",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SmallGroupKind::Growth => "Growth Group",
            SmallGroupKind::Life => "Life Group",
        }
    }
}

impl FromStr for SmallGroupKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "growth" => Ok(SmallGroupKind::Growth),
            "life" => Ok(SmallGroupKind::Life),
            _ => Err(format!("Invalid small group kind: {}", s)),
        }
    }
}

impl fmt::Display for SmallGroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recurring or fixed-term gathering with optional capacity tracking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SmallGroup {
    pub id: Uuid,
    pub name: String,
    pub kind: SmallGroupKind,
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

impl SmallGroup {
    /// Groups without a capacity limit always have room.
    pub fn has_room(&self) -> bool {
        self.max_capacity
            .map(|max| self.current_count < max)
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(max: Option<i32>, current: i32) -> SmallGroup {
        SmallGroup {
            id: Uuid::new_v4(),
            name: "Lent Study".to_string(),
            kind: SmallGroupKind::Growth,
            description: "6-week topical study".to_string(),
            leader: None,
            meeting_day: None,
            meeting_time: None,
            location: None,
            max_capacity: max,
            current_count: current,
            open_for_signup: true,
            contact_email: None,
            active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Growth".parse::<SmallGroupKind>().unwrap(), SmallGroupKind::Growth);
        assert_eq!("LIFE".parse::<SmallGroupKind>().unwrap(), SmallGroupKind::Life);
        assert!("book-club".parse::<SmallGroupKind>().is_err());
    }

    #[test]
    fn has_room_treats_missing_capacity_as_unlimited() {
        assert!(group(None, 100).has_room());
        assert!(group(Some(12), 11).has_room());
        assert!(!group(Some(12), 12).has_room());
    }
}
