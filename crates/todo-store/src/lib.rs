pub mod queries;

use std::sync::Mutex;

use thiserror::Error;
use uuid::Uuid;

use todo_types::models::User;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("username already registered")]
    UsernameTaken,

    #[error("user not found")]
    UserNotFound,

    #[error("todo not found")]
    TodoNotFound,

    #[error("store lock poisoned")]
    Poisoned,
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Identity of a stored user, without their todos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub id: Uuid,
    pub username: String,
}

/// In-process user store. Nothing survives a restart.
///
/// Every operation runs under a single lock acquisition, so a lookup and the
/// mutation that follows it are atomic with respect to other requests.
#[derive(Debug, Default)]
pub struct Store {
    users: Mutex<Vec<User>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<User>) -> Result<T>,
    {
        let mut users = self.users.lock().map_err(|_| StoreError::Poisoned)?;
        f(&mut users)
    }
}
