//! Client-user assignment endpoints

use axum::response::IntoResponse;
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use http::StatusCode;
use shared::models::{ClientRef, ClientUser, ClientUserCreate, ClientUserView};
use uuid::Uuid;

use crate::auth::{Principal, policy};
use crate::db;
use crate::error::{ApiResult, AppError};
use crate::state::AppState;
use crate::util::now_millis;

/// GET /api/client-users — SuperAdmin sees all assignments; Admin only those
/// for clients they own.
pub async fn list_client_users(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> ApiResult<Vec<ClientUserView>> {
    policy::require_admin(&principal)?;

    if principal.role == policy::SUPER_ADMIN {
        return Ok(Json(db::client_users::list_all(&state.pool).await?));
    }

    let user = super::current_user(&state, &principal).await?;
    Ok(Json(
        db::client_users::list_by_client_owner(&state.pool, user.id).await?,
    ))
}

/// POST /api/client-users
pub async fn create_client_user(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<ClientUserCreate>,
) -> Result<impl IntoResponse, AppError> {
    policy::require_admin(&principal)?;

    // role is free text by design, but must be present and non-empty
    let (client_id, user_id, role) = match (body.client_id, body.user_id, body.role) {
        (Some(c), Some(u), Some(r)) if !r.is_empty() => (c, u, r),
        _ => return Err(AppError::validation("Missing required fields")),
    };

    let client = db::clients::find_by_id(&state.pool, client_id)
        .await?
        .ok_or_else(|| AppError::not_found("Client not found"))?;

    let assignee = db::users::find_summary_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    let actor = super::current_user(&state, &principal).await?;
    if !policy::can_manage(&principal.role, client.owner_id, actor.id) {
        return Err(AppError::forbidden(
            "You do not have permission to assign users to this client",
        ));
    }

    let assignment = ClientUser {
        id: Uuid::new_v4(),
        user_id,
        client_id,
        role,
        created_at: now_millis(),
    };

    // The (user_id, client_id) unique constraint is the duplicate check.
    db::client_users::insert(&state.pool, &assignment)
        .await
        .map_err(map_insert_error)?;

    let view = ClientUserView {
        id: assignment.id,
        role: assignment.role,
        user: assignee,
        client: ClientRef {
            id: client.id,
            name: client.name,
            client_id: client.client_id,
        },
    };
    Ok((StatusCode::CREATED, Json(view)))
}

/// A duplicate (user_id, client_id) insert trips the storage-level unique
/// constraint and surfaces as Conflict; anything else is an internal error.
fn map_insert_error(e: sqlx::Error) -> AppError {
    match e.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => {
            AppError::conflict("User is already assigned to this client")
        }
        _ => e.into(),
    }
}

/// DELETE /api/client-users/{id}
pub async fn delete_client_user(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
) -> ApiResult<serde_json::Value> {
    policy::require_admin(&principal)?;

    let assignment = db::client_users::find_with_owner(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Client user not found"))?;

    let actor = super::current_user(&state, &principal).await?;
    if !policy::can_manage(&principal.role, assignment.owner_id, actor.id) {
        return Err(AppError::forbidden(
            "You do not have permission to remove users from this client",
        ));
    }

    db::client_users::delete(&state.pool, id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};

    #[derive(Debug)]
    struct FakeDbError {
        unique: bool,
    }

    impl std::fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.message())
        }
    }

    impl std::error::Error for FakeDbError {}

    impl DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            if self.unique {
                "duplicate key value violates unique constraint"
            } else {
                "insert or update violates foreign key constraint"
            }
        }

        fn kind(&self) -> ErrorKind {
            if self.unique {
                ErrorKind::UniqueViolation
            } else {
                ErrorKind::ForeignKeyViolation
            }
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }
    }

    #[test]
    fn duplicate_assignment_maps_to_conflict() {
        let err = sqlx::Error::Database(Box::new(FakeDbError { unique: true }));
        let mapped = map_insert_error(err);
        assert!(matches!(mapped, AppError::Conflict(_)));
        assert_eq!(mapped.to_string(), "User is already assigned to this client");
        assert_eq!(mapped.status(), http::StatusCode::CONFLICT);
    }

    #[test]
    fn other_constraint_violations_stay_internal() {
        let err = sqlx::Error::Database(Box::new(FakeDbError { unique: false }));
        assert!(matches!(map_insert_error(err), AppError::Internal));
    }

    #[test]
    fn non_database_errors_stay_internal() {
        assert!(matches!(
            map_insert_error(sqlx::Error::PoolTimedOut),
            AppError::Internal
        ));
    }
}
