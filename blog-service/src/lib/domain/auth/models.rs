use std::fmt;

use crate::domain::auth::errors::PasswordPolicyError;
use crate::user::models::EmailAddress;

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub email: EmailAddress,
    pub password: Password,
}

impl RegisterUserCommand {
    /// Construct a new register user command.
    ///
    /// # Arguments
    /// * `email` - Validated email address
    /// * `password` - Policy-checked plaintext password (will be hashed by the service)
    ///
    /// # Returns
    /// RegisterUserCommand with validated fields
    pub fn new(email: EmailAddress, password: Password) -> Self {
        Self { email, password }
    }
}

/// Plaintext password value type
///
/// Enforces the minimum length policy and keeps the value out of Debug
/// output so it cannot reach the logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 8;

    /// Create a new policy-checked password.
    ///
    /// # Arguments
    /// * `password` - Raw plaintext password
    ///
    /// # Returns
    /// Validated Password value object
    ///
    /// # Errors
    /// * `TooShort` - Password shorter than 8 characters
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        let length = password.len();
        if length < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }

        Ok(Self(password))
    }

    /// Get password as string slice.
    ///
    /// # Returns
    /// Password string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"<redacted>").finish()
    }
}
