//! Services organized by domain concern.

pub mod diagnostics;
pub mod user_service;

pub use user_service::UserService;
