//! Error code constants for API responses.
//!
//! These codes provide a machine-readable identifier for each error type,
//! making it easier for API clients to handle errors programmatically.

// Validation errors
pub const CODE_FIELDS_REQUIRED: &str = "FIELDS_REQUIRED";

// User errors
pub const CODE_USER_NOT_FOUND: &str = "USER_NOT_FOUND";

// Generic errors
pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";
