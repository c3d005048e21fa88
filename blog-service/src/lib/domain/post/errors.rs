use thiserror::Error;

use crate::domain::category::errors::CategoryIdError;

/// Error for PostId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for PostTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostTitleError {
    #[error("Post title cannot be empty")]
    Empty,
}

/// Error for PostContent validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostContentError {
    #[error("Post content cannot be empty")]
    Empty,
}

/// Top-level error for all post-related operations
#[derive(Debug, Clone, Error)]
pub enum PostError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid post ID: {0}")]
    InvalidPostId(#[from] PostIdError),

    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] PostTitleError),

    #[error("Invalid content: {0}")]
    InvalidContent(#[from] PostContentError),

    #[error("Invalid category ID: {0}")]
    InvalidCategoryId(#[from] CategoryIdError),

    // Domain-level errors
    #[error("Post with ID {0} not found")]
    NotFound(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
