//! Create-user validation.

use validator::Validate;

use crate::errors::ApiError;
use crate::models::{CreateUserRequest, NewUser};

use super::{fields_required_error, validation_errors_to_api_error};

/// Check presence of `email` and `name` and turn the request into a [`NewUser`].
///
/// Absent, null and empty strings are all rejected; no trimming is applied.
pub fn validate_create_user(req: CreateUserRequest) -> Result<NewUser, ApiError> {
    req.validate().map_err(validation_errors_to_api_error)?;

    match (req.email, req.name) {
        (Some(email), Some(name)) => Ok(NewUser { email, name }),
        _ => Err(fields_required_error()),
    }
}
