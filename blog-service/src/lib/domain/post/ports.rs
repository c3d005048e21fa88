use async_trait::async_trait;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::UpdatePostCommand;

/// Port for post domain service operations.
#[async_trait]
pub trait PostServicePort: Send + Sync + 'static {
    /// Create a new post for an author.
    ///
    /// # Arguments
    /// * `command` - Validated command with title, content, author, and category links
    ///
    /// # Returns
    /// Created post entity
    ///
    /// # Errors
    /// * `UnknownCategory` - A linked category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create_post(&self, command: CreatePostCommand) -> Result<Post, PostError>;

    /// Retrieve post by unique identifier.
    ///
    /// # Arguments
    /// * `id` - Post ID
    ///
    /// # Returns
    /// Post entity
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_post(&self, id: &PostId) -> Result<Post, PostError>;

    /// Retrieve all posts.
    ///
    /// # Returns
    /// Vector of all posts
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_posts(&self) -> Result<Vec<Post>, PostError>;

    /// Update existing post with optional fields.
    ///
    /// # Arguments
    /// * `id` - Post ID to update
    /// * `command` - Command with optional title, content, and category links
    ///
    /// # Returns
    /// Updated post entity
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `UnknownCategory` - A linked category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_post(&self, id: &PostId, command: UpdatePostCommand)
        -> Result<Post, PostError>;

    /// Delete existing post.
    ///
    /// # Arguments
    /// * `id` - Post ID to delete
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_post(&self, id: &PostId) -> Result<(), PostError>;
}

/// Persistence operations for the post aggregate.
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    /// Persist new post and its category links to storage.
    ///
    /// # Arguments
    /// * `post` - Post entity to create
    ///
    /// # Returns
    /// Created post entity
    ///
    /// # Errors
    /// * `UnknownCategory` - A linked category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, post: Post) -> Result<Post, PostError>;

    /// Retrieve post by identifier.
    ///
    /// # Arguments
    /// * `id` - Post ID
    ///
    /// # Returns
    /// Optional post entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError>;

    /// Retrieve all posts from storage.
    ///
    /// # Returns
    /// Vector of all posts
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Post>, PostError>;

    /// Update existing post and replace its category links.
    ///
    /// # Arguments
    /// * `post` - Post entity with updated fields
    ///
    /// # Returns
    /// Updated post entity
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `UnknownCategory` - A linked category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, post: Post) -> Result<Post, PostError>;

    /// Remove post from storage.
    ///
    /// # Arguments
    /// * `id` - Post ID to delete
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &PostId) -> Result<(), PostError>;
}
