use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::PostData;
use crate::domain::category::models::CategoryId;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::PostContent;
use crate::domain::post::models::PostId;
use crate::domain::post::models::PostTitle;
use crate::domain::post::models::UpdatePostCommand;
use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Json(body): Json<UpdatePostRequest>,
) -> Result<ApiSuccess<PostData>, ApiError> {
    // Parse post ID
    let post_id = PostId::from_string(&post_id).map_err(|e| PostError::from(e))?;

    // Convert request to domain command
    let command = body.try_into_command()?;

    state
        .post_service
        .update_post(&post_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref post| ApiSuccess::new(StatusCode::OK, post.into()))
}

/// HTTP request body for updating a post.
///
/// All fields are optional; missing fields keep their current value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdatePostRequest {
    title: Option<String>,
    content: Option<String>,
    category_ids: Option<Vec<String>>,
}

impl UpdatePostRequest {
    fn try_into_command(self) -> Result<UpdatePostCommand, PostError> {
        let title = self.title.map(PostTitle::new).transpose()?;
        let content = self.content.map(PostContent::new).transpose()?;
        let category_ids = self
            .category_ids
            .map(|ids| {
                ids.iter()
                    .map(|id| CategoryId::from_string(id))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(UpdatePostCommand {
            title,
            content,
            category_ids,
        })
    }
}
