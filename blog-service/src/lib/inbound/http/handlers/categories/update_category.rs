use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::CategoryData;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CategoryName;
use crate::domain::category::models::UpdateCategoryCommand;
use crate::domain::category::ports::CategoryServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    Json(body): Json<UpdateCategoryRequest>,
) -> Result<ApiSuccess<CategoryData>, ApiError> {
    let category_id =
        CategoryId::from_string(&category_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let name = body
        .name
        .map(CategoryName::new)
        .transpose()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .category_service
        .update_category(&category_id, UpdateCategoryCommand { name })
        .await
        .map_err(ApiError::from)
        .map(|ref category| ApiSuccess::new(StatusCode::OK, category.into()))
}

/// HTTP request body for updating a category.
///
/// Fields are optional; missing fields keep their current value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateCategoryRequest {
    name: Option<String>,
}
