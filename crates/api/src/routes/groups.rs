//! Small group endpoints.

use axum::{
    extract::{Query, State},
    Json,
};
use domain::models::{SmallGroup, SmallGroupKind};
use persistence::repositories::SmallGroupRepository;
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub kind: Option<String>,
}

/// Small group with the derived fields the groups page renders: the kind's
/// display label and whether the group still has seats.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SmallGroupResponse {
    #[serde(flatten)]
    pub group: SmallGroup,
    pub kind_label: &'static str,
    pub has_room: bool,
}

impl SmallGroupResponse {
    fn from_group(group: SmallGroup) -> Self {
        let kind_label = group.kind.label();
        let has_room = group.has_room();
        Self {
            group,
            kind_label,
            has_room,
        }
    }
}

/// GET /api/v1/groups?kind=
///
/// An unknown kind is a client mistake, not an empty result.
pub async fn list_groups(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<SmallGroupResponse>>, ApiError> {
    let repo = SmallGroupRepository::new(state.pool.clone());
    let groups = match query.kind.as_deref() {
        Some(raw) => {
            let kind: SmallGroupKind = raw.parse().map_err(|message| ApiError::Validation {
                message,
                details: Vec::new(),
            })?;
            repo.find_by_kind(kind.into()).await?
        }
        None => repo.find_active().await?,
    };
    Ok(Json(
        groups
            .into_iter()
            .map(|entity| SmallGroupResponse::from_group(entity.into()))
            .collect(),
    ))
}

/// GET /api/v1/groups/open
pub async fn open_groups(
    State(state): State<AppState>,
) -> Result<Json<Vec<SmallGroupResponse>>, ApiError> {
    let repo = SmallGroupRepository::new(state.pool.clone());
    let groups = repo.find_open().await?;
    Ok(Json(
        groups
            .into_iter()
            .map(|entity| SmallGroupResponse::from_group(entity.into()))
            .collect(),
    ))
}
