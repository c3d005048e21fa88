use axum::body::Body;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use serde::Deserialize;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::models::EmailAddress;
use crate::user::models::User;
use crate::user::models::UserId;

/// Extension type to store the session user ID in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Extension type to store the credential-verified user in request extensions
#[derive(Debug, Clone)]
pub struct VerifiedUser {
    pub user: User,
}

/// Largest login body the credential guard is willing to buffer
const MAX_LOGIN_BODY_BYTES: usize = 16 * 1024;

/// Middleware that validates the session cookie and adds the user ID to
/// request extensions.
///
/// Every rejection is the same 401; the reason only reaches the logs.
pub async fn authenticate_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    // Extract the signed token from the session cookie
    let token = extract_session_token(&req).ok_or_else(|| {
        tracing::warn!("Request without session cookie rejected");
        unauthorized()
    })?;

    // Validate signature and expiration (from auth library)
    let claims = state.token_issuer.verify(token).map_err(|e| {
        tracing::warn!("Session token rejected: {}", e);
        unauthorized()
    })?;

    let user_id = UserId::from_string(&claims.user_id).map_err(|e| {
        tracing::warn!("Session token carries a malformed user ID: {}", e);
        unauthorized()
    })?;

    // Add session user info to request extensions
    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

/// Middleware that verifies the credentials carried in the request body and
/// adds the verified user to request extensions.
///
/// The body is buffered, parsed as `{"email": ..., "password": ...}`, and
/// restored for the downstream handler. A body that cannot be parsed fails
/// exactly like wrong credentials.
pub async fn authenticate_credentials(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    let (parts, body) = req.into_parts();

    let bytes = axum::body::to_bytes(body, MAX_LOGIN_BODY_BYTES)
        .await
        .map_err(|e| {
            tracing::warn!("Failed to read login request body: {}", e);
            invalid_credentials()
        })?;

    let credentials: LoginRequestBody = serde_json::from_slice(&bytes).map_err(|e| {
        tracing::warn!("Malformed login request body: {}", e);
        invalid_credentials()
    })?;

    let email = EmailAddress::new(credentials.email).map_err(|_| invalid_credentials())?;

    let user = state
        .auth_service
        .authenticate(&email, &credentials.password)
        .await
        .map_err(|e| ApiError::from(e).into_response())?;

    // Hand the handler back an untouched request plus the verified user
    let mut req = Request::from_parts(parts, Body::from(bytes));
    req.extensions_mut().insert(VerifiedUser { user });

    Ok(next.run(req).await)
}

/// Raw credential pair carried by a login request
#[derive(Debug, Clone, Deserialize)]
struct LoginRequestBody {
    email: String,
    password: String,
}

fn extract_session_token(req: &Request) -> Option<&str> {
    let cookie_header = req.headers().get(header::COOKIE)?.to_str().ok()?;
    auth::cookie::extract_token(cookie_header)
}

fn unauthorized() -> Response {
    ApiError::Unauthorized("Unauthorized".to_string()).into_response()
}

fn invalid_credentials() -> Response {
    ApiError::from(AuthError::InvalidCredentials).into_response()
}
