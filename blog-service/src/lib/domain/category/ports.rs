use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CreateCategoryCommand;
use crate::domain::category::models::UpdateCategoryCommand;

/// Port for category domain service operations.
#[async_trait]
pub trait CategoryServicePort: Send + Sync + 'static {
    /// Create a new category.
    ///
    /// # Arguments
    /// * `command` - Validated command with the category name
    ///
    /// # Returns
    /// Created category entity
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_category(&self, command: CreateCategoryCommand)
        -> Result<Category, CategoryError>;

    /// Retrieve category by unique identifier.
    ///
    /// # Arguments
    /// * `id` - Category ID
    ///
    /// # Returns
    /// Category entity
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_category(&self, id: &CategoryId) -> Result<Category, CategoryError>;

    /// Retrieve all categories.
    ///
    /// # Returns
    /// Vector of all categories
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError>;

    /// Update existing category with optional fields.
    ///
    /// # Arguments
    /// * `id` - Category ID to update
    /// * `command` - Command with the optional new name
    ///
    /// # Returns
    /// Updated category entity
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_category(
        &self,
        id: &CategoryId,
        command: UpdateCategoryCommand,
    ) -> Result<Category, CategoryError>;

    /// Delete existing category.
    ///
    /// Posts linked to the category lose the link but are not deleted.
    ///
    /// # Arguments
    /// * `id` - Category ID to delete
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_category(&self, id: &CategoryId) -> Result<(), CategoryError>;
}

/// Persistence operations for the category aggregate.
#[async_trait]
pub trait CategoryRepository: Send + Sync + 'static {
    /// Persist new category to storage.
    ///
    /// # Arguments
    /// * `category` - Category entity to create
    ///
    /// # Returns
    /// Created category entity
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, category: Category) -> Result<Category, CategoryError>;

    /// Retrieve category by identifier.
    ///
    /// # Arguments
    /// * `id` - Category ID
    ///
    /// # Returns
    /// Optional category entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, CategoryError>;

    /// Retrieve all categories from storage.
    ///
    /// # Returns
    /// Vector of all categories
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Category>, CategoryError>;

    /// Update existing category in storage.
    ///
    /// # Arguments
    /// * `category` - Category entity with updated fields
    ///
    /// # Returns
    /// Updated category entity
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, category: Category) -> Result<Category, CategoryError>;

    /// Remove category from storage.
    ///
    /// # Arguments
    /// * `id` - Category ID to delete
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &CategoryId) -> Result<(), CategoryError>;
}
