//! Shared types for the SSO admin panel
//!
//! Domain models, request/response payloads, and the fixed scope /
//! grant-type enumerations used by both the server and any API consumers.

pub mod models;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};
pub use types::{GrantType, Scope};
