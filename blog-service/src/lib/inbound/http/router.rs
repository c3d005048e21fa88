use std::sync::Arc;
use std::time::Duration;

use auth::TokenIssuer;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authentication::log_in;
use super::handlers::authentication::log_out;
use super::handlers::authentication::register;
use super::handlers::categories::create_category;
use super::handlers::categories::delete_category;
use super::handlers::categories::get_category;
use super::handlers::categories::list_categories;
use super::handlers::categories::update_category;
use super::handlers::posts::create_post;
use super::handlers::posts::delete_post;
use super::handlers::posts::get_post;
use super::handlers::posts::list_posts;
use super::handlers::posts::update_post;
use super::handlers::users::get_user;
use super::handlers::users::list_users;
use super::middleware::authenticate_credentials;
use super::middleware::authenticate_session;
use crate::domain::auth::service::AuthService;
use crate::domain::category::service::CategoryService;
use crate::domain::post::service::PostService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::category::PostgresCategoryRepository;
use crate::outbound::repositories::post::PostgresPostRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PostgresUserRepository>>,
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub post_service: Arc<PostService<PostgresPostRepository>>,
    pub category_service: Arc<CategoryService<PostgresCategoryRepository>>,
    pub token_issuer: Arc<TokenIssuer>,
}

pub fn create_router(
    auth_service: Arc<AuthService<PostgresUserRepository>>,
    user_service: Arc<UserService<PostgresUserRepository>>,
    post_service: Arc<PostService<PostgresPostRepository>>,
    category_service: Arc<CategoryService<PostgresCategoryRepository>>,
    token_issuer: Arc<TokenIssuer>,
) -> Router {
    let state = AppState {
        auth_service,
        user_service,
        post_service,
        category_service,
        token_issuer,
    };

    let public_routes = Router::new()
        .route("/authentication", post(register))
        .route("/posts", get(list_posts))
        .route("/posts/:post_id", get(get_post))
        .route("/categories", get(list_categories))
        .route("/categories/:category_id", get(get_category));

    // Log-in carries its credentials in the body, not in a session cookie
    let credential_routes = Router::new()
        .route("/authentication/log-in", post(log_in))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            authenticate_credentials,
        ));

    let protected_routes = Router::new()
        .route("/authentication/log-out", post(log_out))
        .route("/users", get(list_users))
        .route("/users/:user_id", get(get_user))
        .route("/posts", post(create_post))
        .route("/posts/:post_id", patch(update_post))
        .route("/posts/:post_id", delete(delete_post))
        .route("/categories", post(create_category))
        .route("/categories/:category_id", patch(update_category))
        .route("/categories/:category_id", delete(delete_category))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            authenticate_session,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
                headers = ?request.headers(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(credential_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
