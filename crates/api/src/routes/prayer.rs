//! Prayer request submission endpoint.

use axum::{extract::State, http::StatusCode, Json};
use domain::models::{CreatePrayerRequest, PrayerRequest};
use persistence::repositories::PrayerRequestRepository;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_prayer_request_submitted;

/// POST /api/v1/prayer-requests
///
/// The only write the public site performs. Rate limited per client IP at
/// the router layer.
pub async fn submit_prayer_request(
    State(state): State<AppState>,
    Json(payload): Json<CreatePrayerRequest>,
) -> Result<(StatusCode, Json<PrayerRequest>), ApiError> {
    payload.validate()?;

    let repo = PrayerRequestRepository::new(state.pool.clone());
    let stored: PrayerRequest = repo
        .create(
            &payload.name,
            payload.email.as_deref(),
            payload.phone.as_deref(),
            &payload.request,
            payload.is_public,
        )
        .await?
        .into();

    record_prayer_request_submitted();
    tracing::info!(id = %stored.id, is_public = stored.is_public, "prayer request received");

    Ok((StatusCode::CREATED, Json(stored)))
}
