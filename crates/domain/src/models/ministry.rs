//! Ministry models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Ministry program category. A closed set; the category drives the display
/// label and accent color on the ministries grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MinistryCategory {
    Outreach,
    Kids,
    Youth,
    Adults,
    Worship,
}

impl MinistryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MinistryCategory::Outreach => "outreach",
            MinistryCategory::Kids => "kids",
            MinistryCategory::Youth => "youth",
            MinistryCategory::Adults => "adults",
            MinistryCategory::Worship => "worship",
        }
    }

    /// Human-readable tab label.
    pub fn label(&self) -> &'static str {
        match self {
            MinistryCategory::Outreach => "Outreach",
            MinistryCategory::Kids => "Kids",
            MinistryCategory::Youth => "Youth",
            MinistryCategory::Adults => "Adults",
            MinistryCategory::Worship => "Worship",
        }
    }

    /// Accent color token used by the category badge.
    pub fn accent(&self) -> &'static str {
        match self {
            MinistryCategory::Outreach => "emerald",
            MinistryCategory::Kids => "gold",
            MinistryCategory::Youth => "orange",
            MinistryCategory::Adults => "teal",
            MinistryCategory::Worship => "navy",
        }
    }
}

impl FromStr for MinistryCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "outreach" => Ok(MinistryCategory::Outreach),
            "kids" => Ok(MinistryCategory::Kids),
            "youth" => Ok(MinistryCategory::Youth),
            "adults" => Ok(MinistryCategory::Adults),
            "worship" => Ok(MinistryCategory::Worship),
            _ => Err(format!("Invalid ministry category: {}", s)),
        }
    }
}

impl fmt::Display for MinistryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named program or activity area of the church.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Ministry {
    pub id: Uuid,
    pub name: String,
    pub category: MinistryCategory,
    pub description: String,
    pub leader: Option<String>,
    pub meeting_info: Option<String>,
    pub sort_order: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
