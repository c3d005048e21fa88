use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::UpdatePostCommand;
use crate::domain::post::ports::PostRepository;
use crate::domain::post::ports::PostServicePort;

/// Domain service implementation for post operations.
///
/// Concrete implementation of PostServicePort with dependency injection.
pub struct PostService<PR>
where
    PR: PostRepository,
{
    repository: Arc<PR>,
}

impl<PR> PostService<PR>
where
    PR: PostRepository,
{
    /// Create a new post service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Post persistence implementation
    ///
    /// # Returns
    /// Configured post service instance
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> PostServicePort for PostService<PR>
where
    PR: PostRepository,
{
    async fn create_post(&self, command: CreatePostCommand) -> Result<Post, PostError> {
        let now = Utc::now();
        let post = Post {
            id: PostId::new(),
            title: command.title,
            content: command.content,
            author_id: command.author_id,
            category_ids: command.category_ids,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(post).await
    }

    async fn get_post(&self, id: &PostId) -> Result<Post, PostError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound(id.to_string()))
    }

    async fn list_posts(&self) -> Result<Vec<Post>, PostError> {
        self.repository.list_all().await
    }

    async fn update_post(
        &self,
        id: &PostId,
        command: UpdatePostCommand,
    ) -> Result<Post, PostError> {
        let mut post = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound(id.to_string()))?;

        if let Some(new_title) = command.title {
            post.title = new_title;
        }

        if let Some(new_content) = command.content {
            post.content = new_content;
        }

        if let Some(new_category_ids) = command.category_ids {
            post.category_ids = new_category_ids;
        }

        post.updated_at = Utc::now();

        self.repository.update(post).await
    }

    async fn delete_post(&self, id: &PostId) -> Result<(), PostError> {
        self.repository.delete(id).await
    }
}
