//! Application constants module.
//!
//! Centralizes error messages, success messages, error codes and the
//! table name used by the SQL statements.

pub mod error_codes;
pub mod errors;
pub mod messages;
pub mod tables;

pub use error_codes::*;
pub use errors::*;
pub use messages::*;
pub use tables::*;
