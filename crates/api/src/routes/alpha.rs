//! Alpha session endpoint.

use axum::{extract::State, Json};
use chrono::Utc;
use domain::models::AlphaSession;
use persistence::repositories::AlphaSessionRepository;
use serde::Serialize;

use crate::app::AppState;
use crate::error::ApiError;

/// Alpha session with its derived capacity fields.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AlphaSessionResponse {
    #[serde(flatten)]
    pub session: AlphaSession,
    pub spots_remaining: i32,
    pub accepting_signups: bool,
}

impl AlphaSessionResponse {
    pub fn from_session(session: AlphaSession) -> Self {
        let spots_remaining = session.spots_remaining();
        let accepting_signups = session.accepting_signups();
        Self {
            session,
            spots_remaining,
            accepting_signups,
        }
    }
}

/// GET /api/v1/alpha/current
///
/// Returns null when no session has open registration; the site hides its
/// Alpha sections.
pub async fn current_session(
    State(state): State<AppState>,
) -> Result<Json<Option<AlphaSessionResponse>>, ApiError> {
    let today = Utc::now().date_naive();
    let repo = AlphaSessionRepository::new(state.pool.clone());
    let session = repo
        .find_current(today)
        .await?
        .map(|entity| AlphaSessionResponse::from_session(entity.into()));
    Ok(Json(session))
}
