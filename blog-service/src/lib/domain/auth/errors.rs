use thiserror::Error;

/// Error for password policy validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },
}

/// Top-level error for authentication operations.
///
/// Variant display strings are the exact messages the HTTP layer discloses
/// to callers. Anything more specific is logged before classification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("User with that email already exists")]
    DuplicateEmail,

    #[error("Wrong credentials provided")]
    InvalidCredentials,

    #[error("Something went wrong")]
    Unexpected,
}
