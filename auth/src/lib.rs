//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for HTTP services:
//! - Password hashing (Argon2id)
//! - Signed session tokens (JWT)
//! - Session cookie construction and parsing
//!
//! Each service defines its own authentication traits and adapts these implementations.
//! This avoids coupling services through shared domain logic while reducing code duplication.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::TokenIssuer;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", 3600);
//! let token = issuer.issue("user123").unwrap();
//! let claims = issuer.verify(&token).unwrap();
//! assert_eq!(claims.user_id, "user123");
//! ```
//!
//! ## Session Cookies
//! ```
//! use auth::cookie::{create_auth_cookie, extract_token};
//!
//! let cookie = create_auth_cookie("token", 3600);
//! assert_eq!(cookie, "Authentication=token; HttpOnly; Path=/; Max-Age=3600");
//! assert_eq!(extract_token("Authentication=token"), Some("token"));
//! ```

pub mod cookie;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use cookie::AUTH_COOKIE_NAME;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenIssuer;
