//! panel-server — administrative backend for an SSO identity provider
//!
//! Manages users, roles/permissions, OAuth-style client registrations and
//! per-client user assignments through a session-authenticated JSON API
//! backed by PostgreSQL. Client records only; no OAuth/OIDC protocol flows
//! are served here.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod state;
pub mod util;

pub use config::Config;
pub use state::AppState;
