//! User administration endpoints

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{RoleAssignment, RoleSummary, UserWithRole};
use uuid::Uuid;

use crate::auth::{Principal, policy};
use crate::db;
use crate::error::{ApiResult, AppError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserListQuery {
    pub role: Option<String>,
}

/// GET /api/users?role=NAME
pub async fn list_users(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Query(query): Query<UserListQuery>,
) -> ApiResult<Vec<UserWithRole>> {
    policy::require_admin(&principal)?;
    let users = db::users::list(&state.pool, query.role.as_deref()).await?;
    Ok(Json(users))
}

/// PATCH /api/users/{id}/role
pub async fn update_user_role(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
    Json(body): Json<RoleAssignment>,
) -> ApiResult<UserWithRole> {
    policy::require_admin(&principal)?;

    let role_id = body
        .role_id
        .ok_or_else(|| AppError::validation("Role ID is required"))?;

    let target = db::users::find_auth_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    let role = db::roles::find_by_id(&state.pool, role_id)
        .await?
        .ok_or_else(|| AppError::not_found("Role not found"))?;

    policy::check_role_assignment(&principal.role, &target.role_name, &role.name)?;

    db::users::update_role(&state.pool, id, role.id).await?;

    Ok(Json(UserWithRole {
        id: target.id,
        name: target.name,
        email: target.email,
        role: RoleSummary {
            id: role.id,
            name: role.name,
        },
    }))
}
