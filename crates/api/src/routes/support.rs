//! Care and support resource endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use domain::models::{SupportCategory, SupportResource};
use persistence::repositories::SupportResourceRepository;
use serde::Serialize;

use crate::app::AppState;
use crate::error::ApiError;

/// One care category with its display metadata and active resources, in the
/// order the support landing page shows them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SupportCategorySection {
    pub category: SupportCategory,
    pub label: &'static str,
    pub icon: &'static str,
    pub subtitle: &'static str,
    pub resources: Vec<SupportResource>,
}

impl SupportCategorySection {
    fn new(category: SupportCategory, resources: Vec<SupportResource>) -> Self {
        Self {
            category,
            label: category.label(),
            icon: category.icon(),
            subtitle: category.subtitle(),
            resources,
        }
    }
}

/// GET /api/v1/support
///
/// Every category is present even when it has no resources yet, so the
/// landing page grid stays stable.
pub async fn list_support(
    State(state): State<AppState>,
) -> Result<Json<Vec<SupportCategorySection>>, ApiError> {
    let repo = SupportResourceRepository::new(state.pool.clone());
    let resources: Vec<SupportResource> = repo
        .find_active()
        .await?
        .into_iter()
        .map(SupportResource::from)
        .collect();

    let sections = SupportCategory::ALL
        .into_iter()
        .map(|category| {
            let matching = resources
                .iter()
                .filter(|resource| resource.category == category)
                .cloned()
                .collect();
            SupportCategorySection::new(category, matching)
        })
        .collect();

    Ok(Json(sections))
}

/// GET /api/v1/support/:category
pub async fn get_support_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<SupportCategorySection>, ApiError> {
    let category: SupportCategory = category
        .parse()
        .map_err(|message: String| ApiError::NotFound(message))?;

    let repo = SupportResourceRepository::new(state.pool.clone());
    let resources = repo
        .find_by_category(category.into())
        .await?
        .into_iter()
        .map(SupportResource::from)
        .collect();

    Ok(Json(SupportCategorySection::new(category, resources)))
}
