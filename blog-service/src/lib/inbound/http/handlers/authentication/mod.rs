pub mod log_in;
pub mod log_out;
pub mod register;

pub use log_in::log_in;
pub use log_out::log_out;
pub use register::register;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::user::models::User;

/// User view returned by the authentication endpoints.
///
/// Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
