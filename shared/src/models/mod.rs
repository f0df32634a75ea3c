//! Domain models and API payloads

pub mod client;
pub mod client_user;
pub mod role;
pub mod user;

pub use client::{Client, ClientCreate, ClientRef, ClientUpdate, ClientWithOwner};
pub use client_user::{ClientUser, ClientUserCreate, ClientUserView};
pub use role::{Role, RoleSummary};
pub use user::{RoleAssignment, User, UserSummary, UserWithRole};
