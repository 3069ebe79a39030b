//! In-memory repository used by handler and service tests.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::db::StoreError;
use crate::models::{NewUser, User};

use super::UserRepository;

#[derive(Default)]
struct State {
    users: Vec<User>,
    last_id: i64,
    failing: bool,
    fail_delete: bool,
    omit_returned_row: bool,
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    state: Mutex<State>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation fails as if the store were unreachable.
    pub fn set_failing(&self, failing: bool) {
        self.lock().failing = failing;
    }

    /// Only `delete_user` fails; the existence check still answers.
    pub fn set_fail_delete(&self, fail: bool) {
        self.lock().fail_delete = fail;
    }

    /// Inserts succeed but report no returned row.
    pub fn set_omit_returned_row(&self, omit: bool) {
        self.lock().omit_returned_row = omit;
    }

    /// Store a row with an explicit id, bypassing id assignment.
    pub fn insert_raw(&self, user: User) {
        let mut state = self.lock();
        state.last_id = state.last_id.max(user.id);
        state.users.push(user);
    }

    pub fn len(&self) -> usize {
        self.lock().users.len()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("repository mutex poisoned")
    }

    fn check(state: &State) -> Result<(), StoreError> {
        if state.failing {
            return Err(StoreError::Failed(
                "connection refused (in-memory store)".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let state = self.lock();
        Self::check(&state)?;
        let mut users = state.users.clone();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn create_user(&self, user: &NewUser) -> Result<Option<User>, StoreError> {
        let mut state = self.lock();
        Self::check(&state)?;
        state.last_id += 1;
        let created = User {
            id: state.last_id,
            email: Some(user.email.clone()),
            name: Some(user.name.clone()),
        };
        state.users.push(created.clone());
        Ok((!state.omit_returned_row).then_some(created))
    }

    async fn user_exists(&self, id: i64) -> Result<bool, StoreError> {
        let state = self.lock();
        Self::check(&state)?;
        Ok(state.users.iter().any(|u| u.id == id))
    }

    async fn delete_user(&self, id: i64) -> Result<u64, StoreError> {
        let mut state = self.lock();
        Self::check(&state)?;
        if state.fail_delete {
            return Err(StoreError::Failed(
                "delete rejected (in-memory store)".to_string(),
            ));
        }
        let before = state.users.len();
        state.users.retain(|u| u.id != id);
        Ok((before - state.users.len()) as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Self::check(&self.lock())
    }
}
