use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenIssuer;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::RegisterUserCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::user::errors::UserError;
use crate::user::models::EmailAddress;
use crate::user::models::User;
use crate::user::models::UserId;
use crate::user::ports::UserRepository;

/// Domain service implementation for authentication operations.
///
/// Concrete implementation of AuthServicePort with dependency injection.
/// Owns the only code path that touches plaintext passwords and stored
/// hashes; everything it returns is redacted.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: PasswordHasher,
    token_issuer: Arc<TokenIssuer>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `token_issuer` - Session token signing implementation
    ///
    /// # Returns
    /// Configured authentication service instance
    pub fn new(repository: Arc<UR>, token_issuer: Arc<TokenIssuer>) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
            token_issuer,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, AuthError> {
        // Hash password using auth library
        let password_hash = self
            .password_hasher
            .hash(command.password.as_str())
            .map_err(|e| {
                tracing::error!("Password hashing failed: {}", e);
                AuthError::Unexpected
            })?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            email: command.email,
            password_hash,
            created_at: now,
            updated_at: now,
        };

        match self.repository.create(user).await {
            Ok(created_user) => Ok(created_user.redacted()),
            Err(UserError::EmailAlreadyExists(_)) => Err(AuthError::DuplicateEmail),
            Err(e) => {
                tracing::error!("Failed to persist new user: {}", e);
                Err(AuthError::Unexpected)
            }
        }
    }

    async fn authenticate(&self, email: &EmailAddress, password: &str) -> Result<User, AuthError> {
        let user = match self.repository.find_by_email(email).await {
            Ok(Some(user)) => user,
            // An unknown email fails exactly like a wrong password
            Ok(None) => return Err(AuthError::InvalidCredentials),
            Err(e) => {
                tracing::error!("Failed to look up user by email: {}", e);
                return Err(AuthError::Unexpected);
            }
        };

        let password_matches = self
            .password_hasher
            .verify(password, &user.password_hash)
            .map_err(|e| {
                tracing::error!("Stored hash for user {} is unusable: {}", user.id, e);
                AuthError::Unexpected
            })?;

        if !password_matches {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user.redacted())
    }

    fn issue_session(&self, user_id: &UserId) -> Result<String, AuthError> {
        let token = self.token_issuer.issue(user_id).map_err(|e| {
            tracing::error!("Failed to issue session token for user {}: {}", user_id, e);
            AuthError::Unexpected
        })?;

        Ok(auth::cookie::create_auth_cookie(
            &token,
            self.token_issuer.expires_in_seconds(),
        ))
    }

    fn clear_session(&self) -> String {
        auth::cookie::create_logout_cookie()
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::auth::models::Password;

    const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    // Define mocks in the test module using mockall
    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
            async fn list_all(&self) -> Result<Vec<User>, UserError>;
        }
    }

    fn test_token_issuer() -> Arc<TokenIssuer> {
        Arc::new(TokenIssuer::new(TEST_SECRET, 3600))
    }

    fn stored_user(email: &str, password: &str) -> User {
        let now = Utc::now();
        User {
            id: UserId::new(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: PasswordHasher::new().hash(password).unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestUserRepository::new();

        // Set up mock expectations
        repository
            .expect_create()
            .withf(|user| {
                user.email.as_str() == "test@example.com"
                    && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = AuthService::new(Arc::new(repository), test_token_issuer());

        let command = RegisterUserCommand::new(
            EmailAddress::new("test@example.com".to_string()).unwrap(),
            Password::new("password123".to_string()).unwrap(),
        );

        let result = service.register(command).await;
        assert!(result.is_ok());

        let user = result.unwrap();
        assert_eq!(user.email.as_str(), "test@example.com");
        // The hash never leaves the service
        assert!(user.password_hash.is_empty());
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|user| {
            Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ))
        });

        let service = AuthService::new(Arc::new(repository), test_token_issuer());

        let command = RegisterUserCommand::new(
            EmailAddress::new("test@example.com".to_string()).unwrap(),
            Password::new("password123".to_string()).unwrap(),
        );

        let result = service.register(command).await;
        assert_eq!(result.unwrap_err(), AuthError::DuplicateEmail);
    }

    #[tokio::test]
    async fn test_register_store_failure_is_unclassified() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .times(1)
            .returning(|_| Err(UserError::DatabaseError("connection reset".to_string())));

        let service = AuthService::new(Arc::new(repository), test_token_issuer());

        let command = RegisterUserCommand::new(
            EmailAddress::new("test@example.com".to_string()).unwrap(),
            Password::new("password123".to_string()).unwrap(),
        );

        let result = service.register(command).await;
        assert_eq!(result.unwrap_err(), AuthError::Unexpected);
    }

    #[tokio::test]
    async fn test_authenticate_success_redacts_hash() {
        let mut repository = MockTestUserRepository::new();

        let user = stored_user("test@example.com", "password123");
        let user_id = user.id;
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthService::new(Arc::new(repository), test_token_issuer());

        let email = EmailAddress::new("test@example.com".to_string()).unwrap();
        let result = service.authenticate(&email, "password123").await;
        assert!(result.is_ok());

        let authenticated = result.unwrap();
        assert_eq!(authenticated.id, user_id);
        assert!(authenticated.password_hash.is_empty());
    }

    #[tokio::test]
    async fn test_authenticate_failures_are_indistinguishable() {
        let email = EmailAddress::new("test@example.com".to_string()).unwrap();

        // Wrong password for a known email
        let mut repository = MockTestUserRepository::new();
        let user = stored_user("test@example.com", "password123");
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));
        let service = AuthService::new(Arc::new(repository), test_token_issuer());
        let wrong_password = service
            .authenticate(&email, "not-the-password")
            .await
            .unwrap_err();

        // Unknown email
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        let service = AuthService::new(Arc::new(repository), test_token_issuer());
        let unknown_email = service
            .authenticate(&email, "password123")
            .await
            .unwrap_err();

        assert_eq!(wrong_password, AuthError::InvalidCredentials);
        assert_eq!(unknown_email, AuthError::InvalidCredentials);
        assert_eq!(wrong_password.to_string(), "Wrong credentials provided");
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_authenticate_unusable_stored_hash() {
        let mut repository = MockTestUserRepository::new();

        let mut user = stored_user("test@example.com", "password123");
        user.password_hash = "not-a-phc-string".to_string();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthService::new(Arc::new(repository), test_token_issuer());

        let email = EmailAddress::new("test@example.com".to_string()).unwrap();
        let result = service.authenticate(&email, "password123").await;

        assert_eq!(result.unwrap_err(), AuthError::Unexpected);
    }

    #[tokio::test]
    async fn test_issue_session_cookie_round_trips() {
        let repository = MockTestUserRepository::new();
        let token_issuer = test_token_issuer();
        let service = AuthService::new(Arc::new(repository), Arc::clone(&token_issuer));

        let user_id = UserId::new();
        let cookie = service.issue_session(&user_id).unwrap();

        assert!(cookie.starts_with("Authentication="));
        assert!(cookie.ends_with("; HttpOnly; Path=/; Max-Age=3600"));

        let token = auth::cookie::extract_token(&cookie).unwrap();
        let claims = token_issuer.verify(token).unwrap();
        assert_eq!(claims.user_id, user_id.to_string());
    }

    #[tokio::test]
    async fn test_clear_session_cookie() {
        let repository = MockTestUserRepository::new();
        let service = AuthService::new(Arc::new(repository), test_token_issuer());

        assert_eq!(
            service.clear_session(),
            "Authentication=; HttpOnly; Path=/; Max-Age=0"
        );
    }
}
