//! Site settings endpoint.

use axum::{extract::State, Json};
use domain::models::SiteSettings;
use persistence::repositories::SiteSettingsRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/v1/settings
///
/// Returns the singleton settings row, or null when it has not been seeded;
/// the client omits the affected footer/header sections.
pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<Option<SiteSettings>>, ApiError> {
    let repo = SiteSettingsRepository::new(state.pool.clone());
    let settings = repo.find().await?.map(SiteSettings::from);
    Ok(Json(settings))
}
