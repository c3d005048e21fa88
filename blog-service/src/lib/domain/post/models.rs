use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::category::models::CategoryId;
use crate::domain::post::errors::PostContentError;
use crate::domain::post::errors::PostIdError;
use crate::domain::post::errors::PostTitleError;
use crate::user::models::UserId;

/// Post aggregate entity.
///
/// Represents a published blog post together with its category links.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub content: PostContent,
    pub author_id: UserId,
    pub category_ids: Vec<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub Uuid);

impl PostId {
    /// Generate a new random post ID.
    ///
    /// # Returns
    /// PostId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a post ID from string.
    ///
    /// # Arguments
    /// * `s` - UUID string to parse
    ///
    /// # Returns
    /// Parsed PostId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, PostIdError> {
        Uuid::parse_str(s)
            .map(PostId)
            .map_err(|e| PostIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Post title value type
///
/// Ensures the title is not empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    /// Create a new validated post title.
    ///
    /// # Arguments
    /// * `title` - Raw title string
    ///
    /// # Returns
    /// Validated PostTitle value object
    ///
    /// # Errors
    /// * `Empty` - Title is empty or whitespace only
    pub fn new(title: String) -> Result<Self, PostTitleError> {
        if title.trim().is_empty() {
            return Err(PostTitleError::Empty);
        }

        Ok(Self(title))
    }

    /// Get title as string slice.
    ///
    /// # Returns
    /// Title string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Post content value type
///
/// Ensures the content is not empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    /// Create a new validated post content.
    ///
    /// # Arguments
    /// * `content` - Raw content string
    ///
    /// # Returns
    /// Validated PostContent value object
    ///
    /// # Errors
    /// * `Empty` - Content is empty or whitespace only
    pub fn new(content: String) -> Result<Self, PostContentError> {
        if content.trim().is_empty() {
            return Err(PostContentError::Empty);
        }

        Ok(Self(content))
    }

    /// Get content as string slice.
    ///
    /// # Returns
    /// Content string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to create a new post with domain types
#[derive(Debug)]
pub struct CreatePostCommand {
    pub title: PostTitle,
    pub content: PostContent,
    pub author_id: UserId,
    pub category_ids: Vec<CategoryId>,
}

/// Command to update an existing post with optional validated fields.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated. The author never changes.
#[derive(Debug)]
pub struct UpdatePostCommand {
    pub title: Option<PostTitle>,
    pub content: Option<PostContent>,
    pub category_ids: Option<Vec<CategoryId>>,
}
