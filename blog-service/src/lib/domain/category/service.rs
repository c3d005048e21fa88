use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CreateCategoryCommand;
use crate::domain::category::models::UpdateCategoryCommand;
use crate::domain::category::ports::CategoryRepository;
use crate::domain::category::ports::CategoryServicePort;

/// Domain service implementation for category operations.
///
/// Concrete implementation of CategoryServicePort with dependency injection.
pub struct CategoryService<CR>
where
    CR: CategoryRepository,
{
    repository: Arc<CR>,
}

impl<CR> CategoryService<CR>
where
    CR: CategoryRepository,
{
    /// Create a new category service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Category persistence implementation
    ///
    /// # Returns
    /// Configured category service instance
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CategoryServicePort for CategoryService<CR>
where
    CR: CategoryRepository,
{
    async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<Category, CategoryError> {
        let now = Utc::now();
        let category = Category {
            id: CategoryId::new(),
            name: command.name,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(category).await
    }

    async fn get_category(&self, id: &CategoryId) -> Result<Category, CategoryError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id.to_string()))
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError> {
        self.repository.list_all().await
    }

    async fn update_category(
        &self,
        id: &CategoryId,
        command: UpdateCategoryCommand,
    ) -> Result<Category, CategoryError> {
        let mut category = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id.to_string()))?;

        if let Some(new_name) = command.name {
            category.name = new_name;
        }

        category.updated_at = Utc::now();

        self.repository.update(category).await
    }

    async fn delete_category(&self, id: &CategoryId) -> Result<(), CategoryError> {
        self.repository.delete(id).await
    }
}
