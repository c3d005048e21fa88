use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies signed session tokens.
///
/// Tokens are JWTs signed with HS256 (HMAC with SHA-256). Verification
/// allows no clock leeway, so a token is rejected the moment its `exp`
/// passes. There is no revocation: an issued token stays valid until then.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    expires_in_seconds: i64,
}

impl TokenIssuer {
    /// Create a new token issuer.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `expires_in_seconds` - Lifetime applied to every issued token
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], expires_in_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            expires_in_seconds,
        }
    }

    /// Lifetime applied to issued tokens, in seconds.
    pub fn expires_in_seconds(&self) -> i64 {
        self.expires_in_seconds
    }

    /// Issue a signed token for a user.
    ///
    /// # Arguments
    /// * `user_id` - Identifier stored in the `userId` claim
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, user_id: impl ToString) -> Result<String, TokenError> {
        self.encode(&Claims::new(user_id, self.expires_in_seconds))
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    /// * `TokenExpired` - The `exp` claim is in the past
    /// * `InvalidToken` - Bad signature, malformed token, or missing claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                _ => TokenError::InvalidToken(e.to_string()),
            })?;

        Ok(token_data.claims)
    }

    fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }
}
