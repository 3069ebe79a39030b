//! User handlers: list, create and delete.

use actix_web::{web, HttpResponse};
use log::debug;

use crate::errors::ApiError;
use crate::models::{
    CreateUserRequest, CreatedUserResponse, DeletedUserResponse, UserListResponse,
};
use crate::services::UserService;
use crate::validators::validate_create_user;

/// List all users in ascending id order
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = UserListResponse),
        (status = 500, description = "Store failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn list_users(user_service: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    let users = user_service.list_users().await?;
    Ok(HttpResponse::Ok().json(UserListResponse { users }))
}

/// Create a user; the id is assigned by the store
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = CreatedUserResponse),
        (status = 400, description = "Missing email or name", body = crate::models::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let new_user = validate_create_user(body.into_inner())?;
    let created = user_service.create_user(new_user).await?;
    Ok(HttpResponse::Created().json(CreatedUserResponse { created }))
}

/// Delete a user by id
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = DeletedUserResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    debug!("Deleting user with id: {}", user_id);

    let deleted = user_service.delete_user(user_id).await?;
    Ok(HttpResponse::Ok().json(DeletedUserResponse { deleted }))
}
