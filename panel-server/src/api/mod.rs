//! API routes for the panel server

pub mod auth;
pub mod client_users;
pub mod clients;
pub mod health;
pub mod roles;
pub mod users;

use axum::routing::{delete, get, patch, post};
use axum::{Router, middleware};
use shared::models::User;
use tower_http::trace::TraceLayer;

use crate::auth::Principal;
use crate::auth::session::session_auth_middleware;
use crate::error::AppError;
use crate::state::AppState;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    // Session-authenticated resource endpoints
    let protected = Router::new()
        .route("/api/session", get(auth::session))
        .route(
            "/api/clients",
            get(clients::list_clients).post(clients::create_client),
        )
        .route(
            "/api/clients/{id}",
            get(clients::get_client)
                .put(clients::update_client)
                .delete(clients::delete_client),
        )
        .route("/api/roles", get(roles::list_roles))
        .route("/api/users", get(users::list_users))
        .route("/api/users/{id}/role", patch(users::update_user_role))
        .route(
            "/api/client-users",
            get(client_users::list_client_users).post(client_users::create_client_user),
        )
        .route(
            "/api/client-users/{id}",
            delete(client_users::delete_client_user),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_auth_middleware,
        ));

    // Public endpoints (no session)
    let public = Router::new()
        .route("/health", get(health::health_check))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resolve the requesting user's database row by session email.
///
/// The session token does not carry a reliable id for ownership checks, so
/// the acting user is re-looked-up by email on every resource-scoped
/// operation.
pub async fn current_user(state: &AppState, principal: &Principal) -> Result<User, AppError> {
    crate::db::users::find_by_email(&state.pool, &principal.email)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))
}
