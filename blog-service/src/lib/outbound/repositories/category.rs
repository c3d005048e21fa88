use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CategoryName;
use crate::domain::category::ports::CategoryRepository;

/// PostgreSQL implementation of the category repository.
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    /// Create a new repository backed by the given connection pool.
    ///
    /// # Arguments
    /// * `pool` - PostgreSQL connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CategoryRow {
    fn try_into_category(self) -> Result<Category, CategoryError> {
        Ok(Category {
            id: CategoryId(self.id),
            name: CategoryName::new(self.name)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn create(&self, category: Category) -> Result<Category, CategoryError> {
        sqlx::query(
            r#"
            INSERT INTO categories (id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(category.id.0)
        .bind(category.name.as_str())
        .bind(category.created_at)
        .bind(category.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        Ok(category)
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, CategoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        match row {
            Some(row) => Ok(Some(row.try_into_category()?)),
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<Category>, CategoryError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM categories
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(CategoryRow::try_into_category).collect()
    }

    async fn update(&self, category: Category) -> Result<Category, CategoryError> {
        let result = sqlx::query(
            r#"
            UPDATE categories
            SET name = $2, updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(category.id.0)
        .bind(category.name.as_str())
        .bind(category.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CategoryError::NotFound(category.id.to_string()));
        }

        Ok(category)
    }

    async fn delete(&self, id: &CategoryId) -> Result<(), CategoryError> {
        // Links in post_categories go with the category via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CategoryError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
