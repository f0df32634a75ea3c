//! Session authentication and authorization policy

pub mod policy;
pub mod session;

pub use session::Principal;
