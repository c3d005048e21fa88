use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::PostData;
use crate::domain::category::errors::CategoryIdError;
use crate::domain::category::models::CategoryId;
use crate::domain::post::errors::PostContentError;
use crate::domain::post::errors::PostTitleError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::PostContent;
use crate::domain::post::models::PostTitle;
use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_post(
    State(state): State<AppState>,
    Extension(session): Extension<AuthenticatedUser>,
    Json(body): Json<CreatePostRequest>,
) -> Result<ApiSuccess<PostData>, ApiError> {
    let command = body.try_into_command(&session)?;

    state
        .post_service
        .create_post(command)
        .await
        .map_err(ApiError::from)
        .map(|ref post| ApiSuccess::new(StatusCode::CREATED, post.into()))
}

/// HTTP request body for creating a post (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePostRequest {
    title: String,
    content: String,
    #[serde(default)]
    category_ids: Vec<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreatePostRequestError {
    #[error("Invalid title: {0}")]
    Title(#[from] PostTitleError),

    #[error("Invalid content: {0}")]
    Content(#[from] PostContentError),

    #[error("Invalid category ID: {0}")]
    CategoryId(#[from] CategoryIdError),
}

impl CreatePostRequest {
    fn try_into_command(
        self,
        session: &AuthenticatedUser,
    ) -> Result<CreatePostCommand, ParseCreatePostRequestError> {
        let title = PostTitle::new(self.title)?;
        let content = PostContent::new(self.content)?;
        let category_ids = self
            .category_ids
            .iter()
            .map(|id| CategoryId::from_string(id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CreatePostCommand {
            title,
            content,
            author_id: session.user_id,
            category_ids,
        })
    }
}

impl From<ParseCreatePostRequestError> for ApiError {
    fn from(err: ParseCreatePostRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
