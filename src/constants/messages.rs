//! Log and status message constants.

// Health messages
pub const MSG_STATUS_OK: &str = "OK";
pub const MSG_STATUS_DEGRADED: &str = "DEGRADED";
pub const MSG_DATABASE_CONNECTED: &str = "connected";
pub const MSG_DATABASE_UNREACHABLE: &str = "unreachable";

// Startup messages
pub const MSG_DB_CONNECTED: &str = "DB connected OK";
pub const MSG_DB_CONNECT_FAILED: &str = "DB connect failed";
