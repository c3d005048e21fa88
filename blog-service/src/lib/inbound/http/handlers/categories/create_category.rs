use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::CategoryData;
use crate::domain::category::models::CategoryName;
use crate::domain::category::models::CreateCategoryCommand;
use crate::domain::category::ports::CategoryServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_category(
    State(state): State<AppState>,
    Json(body): Json<CreateCategoryRequest>,
) -> Result<ApiSuccess<CategoryData>, ApiError> {
    let name = CategoryName::new(body.name).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .category_service
        .create_category(CreateCategoryCommand { name })
        .await
        .map_err(ApiError::from)
        .map(|ref category| ApiSuccess::new(StatusCode::CREATED, category.into()))
}

/// HTTP request body for creating a category (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCategoryRequest {
    name: String,
}
