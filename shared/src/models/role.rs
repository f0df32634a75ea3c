//! Role model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role record as returned by the role listing (no permission details)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

/// Role reference embedded in user responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RoleSummary {
    pub id: Uuid,
    pub name: String,
}
