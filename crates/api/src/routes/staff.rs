//! Staff directory and leadership endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use domain::models::StaffMember;
use persistence::repositories::StaffMemberRepository;
use serde::Deserialize;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub department: Option<String>,
}

/// GET /api/v1/staff?department=
pub async fn list_staff(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<StaffMember>>, ApiError> {
    let repo = StaffMemberRepository::new(state.pool.clone());
    let staff = repo.find_active(query.department.as_deref()).await?;
    Ok(Json(staff.into_iter().map(StaffMember::from).collect()))
}

/// GET /api/v1/staff/leadership
pub async fn leadership_team(
    State(state): State<AppState>,
) -> Result<Json<Vec<StaffMember>>, ApiError> {
    let repo = StaffMemberRepository::new(state.pool.clone());
    let staff = repo.find_leadership().await?;
    Ok(Json(staff.into_iter().map(StaffMember::from).collect()))
}

/// GET /api/v1/staff/:id
pub async fn get_staff_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StaffMember>, ApiError> {
    let repo = StaffMemberRepository::new(state.pool.clone());
    let member = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Staff member not found".into()))?;
    Ok(Json(member.into()))
}
