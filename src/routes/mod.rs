use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use log::{debug, warn};

use crate::constants::{CODE_NOT_FOUND, ERR_RESOURCE_NOT_FOUND};
use crate::errors::ApiError;
use crate::handlers;
use crate::openapi;
use crate::validators::fields_required_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        // Health check
        .route("/health", web::get().to(handlers::health_check))
        // OpenAPI document
        .route("/api-docs/openapi.json", web::get().to(openapi::openapi_json))
        .service(
            web::resource("/users")
                // List all users, ascending by id
                .route(web::get().to(handlers::list_users))
                // Create a user
                .route(web::post().to(handlers::create_user)),
        )
        // Delete a user; the id must be an integer
        .service(web::resource("/users/{id}").route(web::delete().to(handlers::delete_user)))
        .default_service(web::to(not_found));
}

/// An unreadable body is reported the same way as missing fields.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected create-user body: {}", err);
        fields_required_error().into()
    })
}

/// A path segment that does not parse (e.g. a non-integer id) means the
/// route does not match.
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        debug!("Path {} did not match: {}", req.path(), err);
        ApiError::not_found(CODE_NOT_FOUND, ERR_RESOURCE_NOT_FOUND).into()
    })
}

async fn not_found(req: HttpRequest) -> HttpResponse {
    debug!("No route for {} {}", req.method(), req.path());
    ApiError::not_found(CODE_NOT_FOUND, ERR_RESOURCE_NOT_FOUND).error_response()
}
