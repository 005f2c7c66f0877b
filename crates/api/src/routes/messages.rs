//! Sermon archive endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use domain::models::Message;
use persistence::repositories::MessageRepository;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;

/// Query parameters for the archive listing; both filters are optional and
/// combine (the archive page's two filter selects).
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub series: Option<String>,
    pub speaker: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LatestQuery {
    pub limit: Option<i64>,
}

/// Distinct filter options for the archive page selects.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FiltersResponse {
    pub series: Vec<String>,
    pub speakers: Vec<String>,
}

/// Message detail: the message itself, a derived embed URL when the video
/// is hosted on YouTube, and the rest of its series.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MessageDetailResponse {
    #[serde(flatten)]
    pub message: Message,
    pub embed_url: Option<String>,
    pub related: Vec<Message>,
}

/// GET /api/v1/messages?series=&speaker=
pub async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let repo = MessageRepository::new(state.pool.clone());
    let messages = repo
        .find_all(query.series.as_deref(), query.speaker.as_deref())
        .await?;
    Ok(Json(messages.into_iter().map(Message::from).collect()))
}

/// GET /api/v1/messages/latest?limit=
pub async fn latest_messages(
    State(state): State<AppState>,
    Query(query): Query<LatestQuery>,
) -> Result<Json<Vec<Message>>, ApiError> {
    // Clamp to a sane page size; the home page asks for 4.
    let limit = query.limit.unwrap_or(4).clamp(1, 50);
    let repo = MessageRepository::new(state.pool.clone());
    let messages = repo.find_latest(limit).await?;
    Ok(Json(messages.into_iter().map(Message::from).collect()))
}

/// GET /api/v1/messages/filters
pub async fn message_filters(
    State(state): State<AppState>,
) -> Result<Json<FiltersResponse>, ApiError> {
    let repo = MessageRepository::new(state.pool.clone());
    let (series, speakers) = tokio::try_join!(repo.distinct_series(), repo.distinct_speakers())?;
    Ok(Json(FiltersResponse { series, speakers }))
}

/// GET /api/v1/messages/:id
pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageDetailResponse>, ApiError> {
    let repo = MessageRepository::new(state.pool.clone());
    let message: Message = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Message not found".into()))?
        .into();

    let related = match message.series.as_deref() {
        Some(series) => repo
            .find_by_series(series, Some(message.id))
            .await?
            .into_iter()
            .map(Message::from)
            .collect(),
        None => Vec::new(),
    };

    let embed_url = message.youtube_embed_url();

    Ok(Json(MessageDetailResponse {
        message,
        embed_url,
        related,
    }))
}
