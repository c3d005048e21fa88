use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::RegisterUserCommand;
use crate::user::models::EmailAddress;
use crate::user::models::User;
use crate::user::models::UserId;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user with hashed credentials.
    ///
    /// # Arguments
    /// * `command` - Validated command containing email and password
    ///
    /// # Returns
    /// Created user entity with the password hash cleared
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `Unexpected` - Hashing or persistence failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, AuthError>;

    /// Verify a user's credentials.
    ///
    /// # Arguments
    /// * `email` - Email address to look up
    /// * `password` - Plaintext password to check
    ///
    /// # Returns
    /// Authenticated user entity with the password hash cleared
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (one error for both)
    /// * `Unexpected` - Lookup or verification machinery failed
    async fn authenticate(&self, email: &EmailAddress, password: &str) -> Result<User, AuthError>;

    /// Build the `Set-Cookie` value that opens a session for a user.
    ///
    /// # Arguments
    /// * `user_id` - User the session token is issued for
    ///
    /// # Returns
    /// HTTP-only cookie string carrying a signed session token
    ///
    /// # Errors
    /// * `Unexpected` - Token signing failed
    fn issue_session(&self, user_id: &UserId) -> Result<String, AuthError>;

    /// Build the `Set-Cookie` value that closes the current session.
    ///
    /// # Returns
    /// Cookie string that immediately expires the session cookie
    fn clear_session(&self) -> String;
}
