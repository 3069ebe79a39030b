//! User repository for all Postgres operations on the users table.
//!
//! Every statement is a fixed, parameterized template run through the
//! [`SqlExecutor`]; no caller-supplied SQL reaches the store.

use async_trait::async_trait;
use log::{debug, error};
use serde_json::Value;

use crate::constants::{ERR_UNEXPECTED_ROW_SHAPE, TABLE_USERS};
use crate::db::{Row, SqlExecutor, Statement, StoreError};
use crate::models::{NewUser, User};

/// Named data-access operations on users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users ordered by ascending id.
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    /// Insert a user and return the stored row, if the store returned one.
    async fn create_user(&self, user: &NewUser) -> Result<Option<User>, StoreError>;

    async fn user_exists(&self, id: i64) -> Result<bool, StoreError>;

    /// Delete a user by id, returning the affected row count.
    async fn delete_user(&self, id: i64) -> Result<u64, StoreError>;

    /// Cheap round trip used by health checks.
    async fn ping(&self) -> Result<(), StoreError>;
}

pub struct PgUserRepository {
    executor: SqlExecutor,
}

impl PgUserRepository {
    pub fn new(executor: SqlExecutor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        debug!("Repository: Listing users");
        let rows = self
            .executor
            .fetch(&list_users_statement())
            .await
            .into_rows()?;
        rows.into_iter().map(row_to_user).collect()
    }

    async fn create_user(&self, user: &NewUser) -> Result<Option<User>, StoreError> {
        debug!("Repository: Inserting user");
        let statement = Statement::new(format!(
            "INSERT INTO {} (email, name) VALUES (:email, :name) RETURNING id, email, name",
            TABLE_USERS
        ))
        .bind("email", user.email.as_str())
        .bind("name", user.name.as_str());

        let rows = self.executor.fetch(&statement).await.into_rows()?;
        rows.into_iter().next().map(row_to_user).transpose()
    }

    async fn user_exists(&self, id: i64) -> Result<bool, StoreError> {
        debug!("Repository: Checking user exists: {}", id);
        let statement = Statement::new(format!(
            "SELECT id FROM {} WHERE id = :id LIMIT 1",
            TABLE_USERS
        ))
        .bind("id", id);

        let rows = self.executor.fetch(&statement).await.into_rows()?;
        Ok(!rows.is_empty())
    }

    async fn delete_user(&self, id: i64) -> Result<u64, StoreError> {
        debug!("Repository: Deleting user: {}", id);
        let statement =
            Statement::new(format!("DELETE FROM {} WHERE id = :id", TABLE_USERS)).bind("id", id);

        self.executor.execute(&statement).await.into_affected()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.executor
            .fetch(&Statement::new("SELECT 1 AS v"))
            .await
            .into_rows()
            .map(|_| ())
    }
}

fn list_users_statement() -> Statement {
    Statement::new(format!(
        "SELECT id, email, name FROM {} ORDER BY id",
        TABLE_USERS
    ))
}

fn row_to_user(row: Row) -> Result<User, StoreError> {
    serde_json::from_value(Value::Object(row)).map_err(|err| {
        error!("{}: {}", ERR_UNEXPECTED_ROW_SHAPE, err);
        StoreError::Decode(err.to_string())
    })
}
