//! Session cookie construction and parsing.
//!
//! The session token travels in an HTTP-only cookie named `Authentication`.
//! These helpers produce `Set-Cookie` values and pull the token back out of
//! an incoming `Cookie` header.

/// Name of the session cookie.
pub const AUTH_COOKIE_NAME: &str = "Authentication";

/// Build the `Set-Cookie` value that establishes a session.
///
/// The cookie is HTTP-only, scoped to the whole site, and expires together
/// with the token it carries.
pub fn create_auth_cookie(token: &str, max_age_seconds: i64) -> String {
    format!(
        "{}={}; HttpOnly; Path=/; Max-Age={}",
        AUTH_COOKIE_NAME, token, max_age_seconds
    )
}

/// Build the `Set-Cookie` value that clears the session cookie.
pub fn create_logout_cookie() -> String {
    format!("{}=; HttpOnly; Path=/; Max-Age=0", AUTH_COOKIE_NAME)
}

/// Extract the session token from a `Cookie` request header.
///
/// Returns `None` when the header carries no `Authentication` cookie. A
/// cleared cookie (empty value) also yields `None`.
pub fn extract_token(cookie_header: &str) -> Option<&str> {
    cookie_header.split(';').map(str::trim).find_map(|part| {
        let (name, value) = part.split_once('=')?;
        (name == AUTH_COOKIE_NAME && !value.is_empty()).then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_auth_cookie() {
        let cookie = create_auth_cookie("abc.def.ghi", 3600);
        assert_eq!(
            cookie,
            "Authentication=abc.def.ghi; HttpOnly; Path=/; Max-Age=3600"
        );
    }

    #[test]
    fn test_create_logout_cookie() {
        assert_eq!(
            create_logout_cookie(),
            "Authentication=; HttpOnly; Path=/; Max-Age=0"
        );
    }

    #[test]
    fn test_extract_token() {
        assert_eq!(
            extract_token("Authentication=abc.def.ghi"),
            Some("abc.def.ghi")
        );
    }

    #[test]
    fn test_extract_token_among_other_cookies() {
        let header = "theme=dark; Authentication=abc.def.ghi; locale=en";
        assert_eq!(extract_token(header), Some("abc.def.ghi"));
    }

    #[test]
    fn test_extract_token_missing() {
        assert_eq!(extract_token("theme=dark; locale=en"), None);
    }

    #[test]
    fn test_extract_token_cleared_cookie() {
        assert_eq!(extract_token("Authentication="), None);
    }

    #[test]
    fn test_extract_token_ignores_prefixed_names() {
        assert_eq!(extract_token("AuthenticationOld=zzz"), None);
    }
}
