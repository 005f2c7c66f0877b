//! Pastoral and practical care resource models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Care category. A closed set; each category carries its display metadata
/// (icon name and subtitle) so pages never keep stringly-typed lookup maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportCategory {
    StephenMinistry,
    CommunityCare,
    Financial,
    Counseling,
    Marriage,
    SupportGroups,
}

impl SupportCategory {
    /// All categories, in the order the support landing page lists them.
    pub const ALL: [SupportCategory; 6] = [
        SupportCategory::StephenMinistry,
        SupportCategory::CommunityCare,
        SupportCategory::Financial,
        SupportCategory::Counseling,
        SupportCategory::Marriage,
        SupportCategory::SupportGroups,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SupportCategory::StephenMinistry => "stephen_ministry",
            SupportCategory::CommunityCare => "community_care",
            SupportCategory::Financial => "financial",
            SupportCategory::Counseling => "counseling",
            SupportCategory::Marriage => "marriage",
            SupportCategory::SupportGroups => "support_groups",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SupportCategory::StephenMinistry => "Stephen Ministry",
            SupportCategory::CommunityCare => "Community Care",
            SupportCategory::Financial => "Financial Coaching",
            SupportCategory::Counseling => "Counseling",
            SupportCategory::Marriage => "Marriage Support",
            SupportCategory::SupportGroups => "Support Groups",
        }
    }

    /// Icon name from the site's outline icon set.
    pub fn icon(&self) -> &'static str {
        match self {
            SupportCategory::StephenMinistry => "heart",
            SupportCategory::CommunityCare => "home-modern",
            SupportCategory::Financial => "banknotes",
            SupportCategory::Counseling => "academic-cap",
            SupportCategory::Marriage => "users",
            SupportCategory::SupportGroups => "user-group",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            SupportCategory::StephenMinistry => "Confidential, one-to-one Christian care",
            SupportCategory::CommunityCare => "Practical assistance when you need it most",
            SupportCategory::Financial => "Guidance for financial peace of mind",
            SupportCategory::Counseling => "Professional support for life's challenges",
            SupportCategory::Marriage => "Strengthening the foundation of your relationship",
            SupportCategory::SupportGroups => "Walking together through shared experiences",
        }
    }
}

impl FromStr for SupportCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stephen_ministry" => Ok(SupportCategory::StephenMinistry),
            "community_care" => Ok(SupportCategory::CommunityCare),
            "financial" => Ok(SupportCategory::Financial),
            "counseling" => Ok(SupportCategory::Counseling),
            "marriage" => Ok(SupportCategory::Marriage),
            "support_groups" => Ok(SupportCategory::SupportGroups),
            _ => Err(format!("Invalid support category: {}", s)),
        }
    }
}

impl fmt::Display for SupportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named care offering with its contact/referral information.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SupportResource {
    pub id: Uuid,
    pub title: String,
    pub category: SupportCategory,
    pub description: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub url: Option<String>,
    pub sort_order: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_str() {
        for cat in SupportCategory::ALL {
            assert_eq!(cat.as_str().parse::<SupportCategory>().unwrap(), cat);
        }
    }

    #[test]
    fn category_rejects_unknown() {
        assert!("bowling".parse::<SupportCategory>().is_err());
    }

    #[test]
    fn every_category_has_an_icon() {
        for cat in SupportCategory::ALL {
            assert!(!cat.icon().is_empty());
            assert!(!cat.subtitle().is_empty());
        }
    }
}
