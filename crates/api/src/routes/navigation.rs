//! Header navigation endpoint.

use axum::Json;
use domain::navigation::{self, NavEntry, NavLink};
use serde::Serialize;

/// Navigation payload for the site header and mobile menu.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct NavigationResponse {
    pub entries: Vec<NavEntry>,
    pub call_to_action: NavLink,
}

/// GET /api/v1/navigation
pub async fn get_navigation() -> Json<NavigationResponse> {
    Json(NavigationResponse {
        entries: navigation::primary_navigation(),
        call_to_action: navigation::call_to_action(),
    })
}
