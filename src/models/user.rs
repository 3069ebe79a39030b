use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A row of the users table.
///
/// Field order matches the projection `id, email, name`, which is also the
/// key order of the serialized JSON. The table is not owned by this
/// service, so `email` and `name` may be NULL and serialize as `null`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    /// Database-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    /// User's email address
    #[schema(example = "a@x.com")]
    pub email: Option<String>,
    /// User's display name
    #[schema(example = "A")]
    pub name: Option<String>,
}

/// Fields needed to insert a user; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub name: String,
}
