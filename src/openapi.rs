use actix_web::HttpResponse;
use utoipa::OpenApi;

use crate::models::{
    CreateUserRequest, CreatedUserResponse, DeletedUserResponse, ErrorResponse, HealthResponse,
    User, UserListResponse,
};

/// OpenAPI documentation for the User Directory API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Directory API",
        version = "0.1.0",
        description = "List, create and delete users stored in a relational table.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User list, create and delete")
    ),
    paths(
        crate::handlers::list_users,
        crate::handlers::create_user,
        crate::handlers::delete_user,
        crate::handlers::health_check
    ),
    components(
        schemas(
            User,
            CreateUserRequest,
            UserListResponse,
            CreatedUserResponse,
            DeletedUserResponse,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
