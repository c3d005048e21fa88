use axum::extract::State;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Extension;

use super::UserData;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::VerifiedUser;
use crate::inbound::http::router::AppState;

/// Open a session for a user whose credentials the middleware has already
/// verified. The signed session token travels back as an HTTP-only cookie.
pub async fn log_in(
    State(state): State<AppState>,
    Extension(verified): Extension<VerifiedUser>,
) -> Result<Response, ApiError> {
    let cookie = state.auth_service.issue_session(&verified.user.id)?;
    let cookie = HeaderValue::from_str(&cookie)
        .map_err(|_| ApiError::InternalServerError("Something went wrong".to_string()))?;

    let mut response =
        ApiSuccess::new(StatusCode::OK, UserData::from(&verified.user)).into_response();
    response.headers_mut().insert(header::SET_COOKIE, cookie);

    Ok(response)
}
