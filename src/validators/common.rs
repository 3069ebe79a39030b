//! Common validation utilities and helpers.

use log::warn;
use validator::ValidationErrors;

use crate::constants::{CODE_FIELDS_REQUIRED, ERR_EMAIL_AND_NAME_REQUIRED};
use crate::errors::ApiError;

/// The error returned whenever create-user input is incomplete.
pub fn fields_required_error() -> ApiError {
    ApiError::bad_request(CODE_FIELDS_REQUIRED, ERR_EMAIL_AND_NAME_REQUIRED)
}

/// Convert validator errors into the single "fields required" error.
///
/// The offending field names are logged; the client gets one fixed message.
///
/// # Example
/// ```ignore
/// body.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let mut fields: Vec<String> = e.field_errors().keys().map(|k| k.to_string()).collect();
    fields.sort();
    warn!("Validation failed for fields: {:?}", fields);
    fields_required_error()
}
