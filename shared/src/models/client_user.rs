//! Client-user assignment model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::client::ClientRef;
use super::user::UserSummary;

/// Raw assignment row linking a user to a client with a per-client role.
///
/// The `role` field is free text (admin/editor/viewer/developer by
/// convention); it is deliberately not an enum.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ClientUser {
    pub id: Uuid,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    #[serde(rename = "clientId")]
    pub client_id: Uuid,
    pub role: String,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

/// Assignment as returned by the API, with user and client summaries embedded
#[derive(Debug, Clone, Serialize)]
pub struct ClientUserView {
    pub id: Uuid,
    pub role: String,
    pub user: UserSummary,
    pub client: ClientRef,
}

/// POST /api/client-users payload
#[derive(Debug, Clone, Deserialize)]
pub struct ClientUserCreate {
    #[serde(rename = "clientId")]
    pub client_id: Option<Uuid>,
    #[serde(rename = "userId")]
    pub user_id: Option<Uuid>,
    pub role: Option<String>,
}
