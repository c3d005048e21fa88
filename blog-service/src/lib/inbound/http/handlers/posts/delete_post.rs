use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    // Parse post ID
    let post_id = PostId::from_string(&post_id).map_err(|e| PostError::from(e))?;

    state
        .post_service
        .delete_post(&post_id)
        .await
        .map_err(|e| ApiError::from(e))
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
