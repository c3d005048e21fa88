use std::collections::HashMap;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::Postgres;
use sqlx::Transaction;
use uuid::Uuid;

use crate::domain::category::models::CategoryId;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostContent;
use crate::domain::post::models::PostId;
use crate::domain::post::models::PostTitle;
use crate::domain::post::ports::PostRepository;
use crate::user::models::UserId;

/// PostgreSQL implementation of the post repository.
///
/// Category links live in the `post_categories` join table and are written
/// in the same transaction as the post row.
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    /// Create a new repository backed by the given connection pool.
    ///
    /// # Arguments
    /// * `pool` - PostgreSQL connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn replace_category_links(
        tx: &mut Transaction<'_, Postgres>,
        post_id: &PostId,
        category_ids: &[CategoryId],
    ) -> Result<(), PostError> {
        sqlx::query("DELETE FROM post_categories WHERE post_id = $1")
            .bind(post_id.0)
            .execute(&mut **tx)
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        for category_id in category_ids {
            sqlx::query(
                r#"
                INSERT INTO post_categories (post_id, category_id)
                VALUES ($1, $2)
                "#,
            )
            .bind(post_id.0)
            .bind(category_id.0)
            .execute(&mut **tx)
            .await
            .map_err(|e| {
                if let Some(db_error) = e.as_database_error() {
                    // A missing category surfaces as a foreign key violation
                    if db_error.is_foreign_key_violation() {
                        return PostError::UnknownCategory(category_id.to_string());
                    }
                }
                PostError::DatabaseError(e.to_string())
            })?;
        }

        Ok(())
    }

    async fn find_category_links(
        &self,
        post_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<CategoryId>>, PostError> {
        let rows = sqlx::query_as::<_, (Uuid, Uuid)>(
            r#"
            SELECT post_id, category_id
            FROM post_categories
            WHERE post_id = ANY($1)
            "#,
        )
        .bind(post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        let mut links: HashMap<Uuid, Vec<CategoryId>> = HashMap::new();
        for (post_id, category_id) in rows {
            links.entry(post_id).or_default().push(CategoryId(category_id));
        }

        Ok(links)
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    content: String,
    author_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn try_into_post(self, category_ids: Vec<CategoryId>) -> Result<Post, PostError> {
        Ok(Post {
            id: PostId(self.id),
            title: PostTitle::new(self.title)?,
            content: PostContent::new(self.content)?,
            author_id: UserId(self.author_id),
            category_ids,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: Post) -> Result<Post, PostError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO posts (id, title, content, author_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(post.id.0)
        .bind(post.title.as_str())
        .bind(post.content.as_str())
        .bind(post.author_id.0)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Self::replace_category_links(&mut tx, &post.id, &post.category_ids).await?;

        tx.commit()
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(post)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, author_id, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        match row {
            Some(row) => {
                let mut links = self.find_category_links(&[row.id]).await?;
                let category_ids = links.remove(&row.id).unwrap_or_default();
                Ok(Some(row.try_into_post(category_ids)?))
            }
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<Post>, PostError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, author_id, created_at, updated_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        let post_ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let mut links = self.find_category_links(&post_ids).await?;

        rows.into_iter()
            .map(|row| {
                let category_ids = links.remove(&row.id).unwrap_or_default();
                row.try_into_post(category_ids)
            })
            .collect()
    }

    async fn update(&self, post: Post) -> Result<Post, PostError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = $2, content = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(post.id.0)
        .bind(post.title.as_str())
        .bind(post.content.as_str())
        .bind(post.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PostError::NotFound(post.id.to_string()));
        }

        Self::replace_category_links(&mut tx, &post.id, &post.category_ids).await?;

        tx.commit()
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(post)
    }

    async fn delete(&self, id: &PostId) -> Result<(), PostError> {
        // Join table rows go with the post via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PostError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
