//! Site navigation tree served to the header and mobile menu.
//!
//! The tree is static content, not database state; it changes with the
//! page structure of the site, so it lives in code.

use serde::Serialize;

/// A single navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    /// External links open in a new tab and get the outbound-link icon.
    pub external: bool,
}

impl NavLink {
    pub fn new(label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            href,
            external: is_external(href),
        }
    }
}

/// A top-level navigation entry: either a plain link or a labeled dropdown
/// of links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct NavEntry {
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavLink>,
}

impl NavEntry {
    fn link(label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            href: Some(href),
            items: Vec::new(),
        }
    }

    fn dropdown(label: &'static str, items: Vec<NavLink>) -> Self {
        Self {
            label,
            href: None,
            items,
        }
    }
}

/// True for absolute http(s) URLs pointing off-site.
pub fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

/// The header navigation, in display order.
pub fn primary_navigation() -> Vec<NavEntry> {
    vec![
        NavEntry::link("I'm New", "/new"),
        NavEntry::link("Gatherings", "/gatherings"),
        NavEntry::link("Alpha", "/alpha"),
        NavEntry::link("Messages", "/messages"),
        NavEntry::dropdown(
            "Connect",
            vec![
                NavLink::new("Ministries", "/connect/ministries"),
                NavLink::new("Small Groups", "/connect/groups"),
                NavLink::new("Serve", "/connect/serve"),
                NavLink::new("Events Calendar", "/events"),
            ],
        ),
        NavEntry::dropdown(
            "Support",
            vec![
                NavLink::new("Prayer Requests", "/support/prayer"),
                NavLink::new("Stephen Ministry", "/support/stephen-ministry"),
                NavLink::new("Community Care", "/support/community-care"),
                NavLink::new("Counseling", "/support/counseling"),
                NavLink::new("Marriage", "/support/marriage"),
                NavLink::new("Support Groups", "/support/groups"),
            ],
        ),
        NavEntry::dropdown(
            "About",
            vec![
                NavLink::new("Our Story", "/about"),
                NavLink::new("What We Believe", "/about/beliefs"),
                NavLink::new("Staff", "/about/staff"),
                NavLink::new("Leadership", "/about/leadership"),
                NavLink::new("Community", "/about/community"),
                NavLink::new("Newsletter", "/about/newsletter"),
            ],
        ),
        NavEntry::link("Give", "/give"),
    ]
}

/// The highlighted call-to-action button next to the navigation.
pub fn call_to_action() -> NavLink {
    NavLink::new("Join Alpha", "/alpha")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_external_links() {
        assert!(is_external("https://live.example.org/stream"));
        assert!(is_external("http://example.org"));
        assert!(!is_external("/about"));
        assert!(!is_external("mailto:info@example.org"));
    }

    #[test]
    fn entries_are_links_or_dropdowns_never_both() {
        for entry in primary_navigation() {
            assert!(
                entry.href.is_some() ^ !entry.items.is_empty(),
                "{} must be exactly one of link or dropdown",
                entry.label
            );
        }
    }

    #[test]
    fn dropdown_items_are_internal_routes() {
        for entry in primary_navigation() {
            for item in &entry.items {
                assert!(item.href.starts_with('/') || item.external);
            }
        }
    }

    #[test]
    fn cta_points_at_alpha() {
        let cta = call_to_action();
        assert_eq!(cta.href, "/alpha");
        assert!(!cta.external);
    }
}
