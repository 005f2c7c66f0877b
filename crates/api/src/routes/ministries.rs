//! Ministries endpoint.

use axum::{extract::State, Json};
use domain::models::Ministry;
use persistence::repositories::MinistryRepository;
use serde::Serialize;

use crate::app::AppState;
use crate::error::ApiError;

/// Ministry with the display attributes its category carries, so the client
/// renders the grid tabs and badges without its own lookup tables.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MinistryResponse {
    #[serde(flatten)]
    pub ministry: Ministry,
    pub category_label: &'static str,
    pub category_accent: &'static str,
}

impl MinistryResponse {
    pub fn from_ministry(ministry: Ministry) -> Self {
        let category_label = ministry.category.label();
        let category_accent = ministry.category.accent();
        Self {
            ministry,
            category_label,
            category_accent,
        }
    }
}

/// GET /api/v1/ministries
pub async fn list_ministries(
    State(state): State<AppState>,
) -> Result<Json<Vec<MinistryResponse>>, ApiError> {
    let repo = MinistryRepository::new(state.pool.clone());
    let ministries = repo.find_active().await?;
    Ok(Json(
        ministries
            .into_iter()
            .map(|entity| MinistryResponse::from_ministry(entity.into()))
            .collect(),
    ))
}
