//! User model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::RoleSummary;

/// Full user row. Carries the password hash, so it is never serialized.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role_id: Uuid,
    pub created_at: i64,
}

/// User summary embedded in client and assignment responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// User listing entry: identity plus role summary, never the password hash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithRole {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: RoleSummary,
}

/// PATCH /api/users/{id}/role payload
#[derive(Debug, Clone, Deserialize)]
pub struct RoleAssignment {
    #[serde(rename = "roleId")]
    pub role_id: Option<Uuid>,
}
