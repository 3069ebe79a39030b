//! User-related response models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::User;

/// All users, ascending by id
#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<User>,
}

/// The row produced by a create
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedUserResponse {
    /// Null when the store reported success without returning the row
    pub created: Option<User>,
}

/// Number of rows removed by a delete
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedUserResponse {
    #[schema(example = 1)]
    pub deleted: u64,
}
