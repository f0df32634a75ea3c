//! Session endpoints: login, logout, current principal

use axum::response::{AppendHeaders, IntoResponse};
use axum::{Extension, Json, extract::State};
use http::header::SET_COOKIE;
use serde::Deserialize;

use crate::auth::Principal;
use crate::auth::session::{clear_session_cookie, create_token, session_cookie};
use crate::db;
use crate::error::{ApiResult, AppError};
use crate::state::AppState;
use crate::util::verify_password;

/// POST /api/login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let email = req.email.trim().to_lowercase();

    // Unknown user and wrong password are indistinguishable to the caller
    let user = db::users::find_auth_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

    if !verify_password(&req.password, &user.password_hash) {
        return Err(AppError::unauthorized("Invalid email or password"));
    }

    let permissions = db::roles::permission_names(&state.pool, user.role_id).await?;

    let principal = Principal {
        id: user.id,
        name: user.name,
        email: user.email,
        role: user.role_name,
        permissions,
    };

    let token = create_token(&principal, &state.session_secret).map_err(|e| {
        tracing::error!("session token creation failed: {e}");
        AppError::Internal
    })?;

    Ok((
        AppendHeaders([(SET_COOKIE, session_cookie(&token))]),
        Json(principal),
    ))
}

/// POST /api/logout
pub async fn logout() -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
        Json(serde_json::json!({ "message": "Logged out" })),
    )
}

/// GET /api/session — the decoded principal (snapshot taken at login)
pub async fn session(Extension(principal): Extension<Principal>) -> ApiResult<Principal> {
    Ok(Json(principal))
}
