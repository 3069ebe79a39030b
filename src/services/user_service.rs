//! User service: list, create and the two-step delete.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::constants::{CODE_USER_NOT_FOUND, ERR_USER_NOT_FOUND};
use crate::errors::ApiError;
use crate::models::{NewUser, User};
use crate::repositories::UserRepository;
use crate::utils::mask_email;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let users = self.repository.list_users().await?;
        debug!("Fetched {} user(s)", users.len());
        Ok(users)
    }

    pub async fn create_user(&self, user: NewUser) -> Result<Option<User>, ApiError> {
        let created = self.repository.create_user(&user).await?;
        match &created {
            Some(row) => info!("Created user {} ({})", row.id, mask_email(&user.email)),
            None => warn!(
                "Insert for {} succeeded but returned no row",
                mask_email(&user.email)
            ),
        }
        Ok(created)
    }

    /// Delete a user after confirming it exists.
    ///
    /// An absent id is reported as not found rather than as a zero-row
    /// delete. The check and the delete are separate transactions.
    pub async fn delete_user(&self, id: i64) -> Result<u64, ApiError> {
        if !self.repository.user_exists(id).await? {
            warn!("User not found with id: {}", id);
            return Err(ApiError::not_found(CODE_USER_NOT_FOUND, ERR_USER_NOT_FOUND));
        }

        let deleted = self.repository.delete_user(id).await?;
        info!("Deleted user {} ({} row(s))", id, deleted);
        Ok(deleted)
    }

    /// Whether the store answers a trivial query.
    pub async fn store_reachable(&self) -> bool {
        match self.repository.ping().await {
            Ok(()) => true,
            Err(err) => {
                warn!("Health check could not reach the store: {}", err);
                false
            }
        }
    }
}
