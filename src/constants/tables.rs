//! Table names referenced by the user statements.

/// Fully qualified, quoted name of the users table. `user` is a reserved
/// word in Postgres, so the quotes are required.
pub const TABLE_USERS: &str = r#"public."user""#;
