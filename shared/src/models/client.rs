//! Client registration model
//!
//! A client is an OAuth-style application *record* (name, generated
//! credentials, scope/grant metadata, owner) — not a live protocol endpoint.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserSummary;

/// Full client registration record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub client_id: String,
    pub client_secret: String,
    pub description: String,
    pub scopes: Vec<String>,
    pub grant_types: Vec<String>,
    #[serde(rename = "ownerId")]
    pub owner_id: Uuid,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

/// Client with its owner's summary attached (SuperAdmin listings)
#[derive(Debug, Clone, Serialize)]
pub struct ClientWithOwner {
    #[serde(flatten)]
    pub client: Client,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserSummary>,
}

/// Client summary embedded in assignment responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ClientRef {
    pub id: Uuid,
    pub name: String,
    pub client_id: String,
}

/// POST /api/clients payload. `name` is required; absent scope/grant lists
/// default to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientCreate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub scopes: Option<Vec<String>>,
    pub grant_types: Option<Vec<String>>,
}

/// PUT /api/clients/{id} payload. Omitted fields keep their previous value;
/// `description` accepts an explicit empty string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub scopes: Option<Vec<String>>,
    pub grant_types: Option<Vec<String>>,
}
