//! User-related request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating a user
///
/// Both fields are optional at the type level so that a missing field is a
/// validation failure rather than a deserialization failure.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// User's email address
    #[validate(
        required(message = "Both 'email' and 'name' are required"),
        length(min = 1, message = "Both 'email' and 'name' are required")
    )]
    #[schema(example = "a@x.com")]
    pub email: Option<String>,
    /// User's display name
    #[validate(
        required(message = "Both 'email' and 'name' are required"),
        length(min = 1, message = "Both 'email' and 'name' are required")
    )]
    #[schema(example = "A")]
    pub name: Option<String>,
}

