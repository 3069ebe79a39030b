//! Repository layer for database operations.
//!
//! Services talk to the store only through the [`UserRepository`] trait,
//! which exposes named operations instead of raw SQL.

pub mod user_repository;

#[cfg(test)]
pub mod memory;

pub use user_repository::{PgUserRepository, UserRepository};
