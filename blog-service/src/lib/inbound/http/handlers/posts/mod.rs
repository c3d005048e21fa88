pub mod create_post;
pub mod delete_post;
pub mod get_post;
pub mod list_posts;
pub mod update_post;

pub use create_post::create_post;
pub use delete_post::delete_post;
pub use get_post::get_post;
pub use list_posts::list_posts;
pub use update_post::update_post;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::post::models::Post;

/// Post view returned by the post endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostData {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub category_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Post> for PostData {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.as_str().to_string(),
            content: post.content.as_str().to_string(),
            author_id: post.author_id.to_string(),
            category_ids: post.category_ids.iter().map(|id| id.to_string()).collect(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
