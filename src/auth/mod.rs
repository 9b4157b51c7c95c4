#[cfg(feature = "desktop")]
pub mod commands;
pub mod credentials;
pub mod service;

pub use service::{AuthError, AuthService};
