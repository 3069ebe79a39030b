//! Error message constants used throughout the application.

// User errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_EMAIL_AND_NAME_REQUIRED: &str = "Both 'email' and 'name' are required";

// Routing errors
pub const ERR_RESOURCE_NOT_FOUND: &str = "Resource not found";

// Store errors
pub const ERR_INTERNAL_SERVER: &str = "Internal server error";
pub const ERR_UNEXPECTED_ROW_SHAPE: &str = "Store returned a row with an unexpected shape";
