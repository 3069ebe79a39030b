use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use std::fmt;
use uuid::Uuid;

use crate::constants::{CODE_INTERNAL_ERROR, ERR_INTERNAL_SERVER};
use crate::db::StoreError;
use crate::models::ErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    BadRequest {
        code: String,
        message: String,
    },
    NotFound {
        code: String,
        message: String,
    },
    InternalServerError {
        code: String,
        message: String,
        correlation_id: String,
    },
}

impl ApiError {
    pub fn bad_request(code: &str, message: &str) -> Self {
        ApiError::BadRequest {
            code: code.to_string(),
            message: message.to_string(),
        }
    }

    pub fn not_found(code: &str, message: &str) -> Self {
        ApiError::NotFound {
            code: code.to_string(),
            message: message.to_string(),
        }
    }

    fn code(&self) -> &str {
        match self {
            ApiError::BadRequest { code, .. }
            | ApiError::NotFound { code, .. }
            | ApiError::InternalServerError { code, .. } => code,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::BadRequest { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::InternalServerError { message, .. } => message,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest { code, message } => {
                write!(f, "Bad Request [{}]: {}", code, message)
            }
            ApiError::NotFound { code, message } => {
                write!(f, "Not Found [{}]: {}", code, message)
            }
            ApiError::InternalServerError { code, message, .. } => {
                write!(f, "Internal Server Error [{}]: {}", code, message)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let correlation_id = match self {
            ApiError::InternalServerError { correlation_id, .. } => Some(correlation_id.clone()),
            _ => None,
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.message().to_string(),
            code: self.code().to_string(),
            correlation_id,
        })
    }
}

/// Store failures are logged in full under a fresh correlation id; the
/// client only sees the id.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let correlation_id = Uuid::new_v4().to_string();
        error!("[{}] Store failure: {}", correlation_id, err);
        ApiError::InternalServerError {
            code: CODE_INTERNAL_ERROR.to_string(),
            message: format!("{} (ref {})", ERR_INTERNAL_SERVER, correlation_id),
            correlation_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CODE_USER_NOT_FOUND, ERR_USER_NOT_FOUND};
    use actix_web::body::to_bytes;
    use serde_json::Value;

    async fn body_of(err: &ApiError) -> Value {
        let bytes = to_bytes(err.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_not_found_response() {
        let err = ApiError::not_found(CODE_USER_NOT_FOUND, ERR_USER_NOT_FOUND);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let body = body_of(&err).await;
        assert_eq!(body["error"], "User not found");
        assert_eq!(body["code"], "USER_NOT_FOUND");
        assert!(body.get("correlation_id").is_none());
    }

    #[actix_web::test]
    async fn test_store_error_is_opaque() {
        let err: ApiError =
            StoreError::Failed("relation \"user\" does not exist".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(&err).await;
        let message = body["error"].as_str().unwrap();
        let correlation_id = body["correlation_id"].as_str().unwrap();

        assert!(!message.contains("relation"));
        assert!(message.starts_with("Internal server error"));
        assert!(message.contains(correlation_id));
        assert!(Uuid::parse_str(correlation_id).is_ok());
        assert_eq!(body["code"], "INTERNAL_ERROR");
    }

    #[test]
    fn test_display_includes_code() {
        let err = ApiError::bad_request("FIELDS_REQUIRED", "missing");
        assert_eq!(err.to_string(), "Bad Request [FIELDS_REQUIRED]: missing");
    }
}
