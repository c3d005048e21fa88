use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::category::errors::CategoryIdError;
use crate::domain::category::errors::CategoryNameError;

/// Category aggregate entity.
///
/// Represents a label that posts can be linked to.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub Uuid);

impl CategoryId {
    /// Generate a new random category ID.
    ///
    /// # Returns
    /// CategoryId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a category ID from string.
    ///
    /// # Arguments
    /// * `s` - UUID string to parse
    ///
    /// # Returns
    /// Parsed CategoryId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, CategoryIdError> {
        Uuid::parse_str(s)
            .map(CategoryId)
            .map_err(|e| CategoryIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Category name value type
///
/// Ensures the name is not empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a new validated category name.
    ///
    /// # Arguments
    /// * `name` - Raw name string
    ///
    /// # Returns
    /// Validated CategoryName value object
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    pub fn new(name: String) -> Result<Self, CategoryNameError> {
        if name.trim().is_empty() {
            return Err(CategoryNameError::Empty);
        }

        Ok(Self(name))
    }

    /// Get name as string slice.
    ///
    /// # Returns
    /// Name string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new category with domain types
#[derive(Debug)]
pub struct CreateCategoryCommand {
    pub name: CategoryName,
}

/// Command to update an existing category.
///
/// Fields are optional to support partial updates.
#[derive(Debug)]
pub struct UpdateCategoryCommand {
    pub name: Option<CategoryName>,
}
