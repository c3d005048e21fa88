use axum::extract::State;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Extension;

use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Close the current session by expiring the session cookie.
pub async fn log_out(
    State(state): State<AppState>,
    Extension(session): Extension<AuthenticatedUser>,
) -> Result<Response, ApiError> {
    tracing::debug!("User {} logged out", session.user_id);

    let cookie = state.auth_service.clear_session();
    let cookie = HeaderValue::from_str(&cookie)
        .map_err(|_| ApiError::InternalServerError("Something went wrong".to_string()))?;

    let mut response = ApiSuccess::new(StatusCode::OK, ()).into_response();
    response.headers_mut().insert(header::SET_COOKIE, cookie);

    Ok(response)
}
