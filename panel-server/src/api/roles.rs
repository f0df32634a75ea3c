//! Role listing endpoint

use axum::{Extension, Json, extract::State};
use shared::models::Role;

use crate::auth::{Principal, policy};
use crate::db;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/roles — SuperAdmin sees all roles; Admin sees only Admin and
/// user. Permission details are never included.
pub async fn list_roles(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> ApiResult<Vec<Role>> {
    policy::require_admin(&principal)?;

    let roles = match policy::visible_role_names(&principal.role) {
        None => db::roles::list_all(&state.pool).await?,
        Some(names) => db::roles::list_by_names(&state.pool, names).await?,
    };
    Ok(Json(roles))
}
