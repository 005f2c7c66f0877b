//! Events calendar endpoints.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use domain::models::Event;
use persistence::repositories::EventRepository;
use serde::Deserialize;

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpcomingQuery {
    pub limit: Option<i64>,
}

/// GET /api/v1/events?category=
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let repo = EventRepository::new(state.pool.clone());
    let events = repo.find_all(query.category.as_deref()).await?;
    Ok(Json(events.into_iter().map(Event::from).collect()))
}

/// GET /api/v1/events/upcoming?limit=
///
/// Featured events sort ahead of the rest, then by soonest start date.
pub async fn upcoming_events(
    State(state): State<AppState>,
    Query(query): Query<UpcomingQuery>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let limit = query.limit.unwrap_or(3).clamp(1, 50);
    let today = Utc::now().date_naive();
    let repo = EventRepository::new(state.pool.clone());
    let events = repo.find_upcoming(today, limit).await?;
    Ok(Json(events.into_iter().map(Event::from).collect()))
}
