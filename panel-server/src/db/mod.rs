//! Database access layer

pub mod client_users;
pub mod clients;
pub mod roles;
pub mod seed;
pub mod users;
