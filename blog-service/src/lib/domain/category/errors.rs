use thiserror::Error;

/// Error for CategoryId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CategoryIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for CategoryName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CategoryNameError {
    #[error("Category name cannot be empty")]
    Empty,
}

/// Top-level error for all category-related operations
#[derive(Debug, Clone, Error)]
pub enum CategoryError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid category ID: {0}")]
    InvalidCategoryId(#[from] CategoryIdError),

    #[error("Invalid name: {0}")]
    InvalidName(#[from] CategoryNameError),

    // Domain-level errors
    #[error("Category with ID {0} not found")]
    NotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
