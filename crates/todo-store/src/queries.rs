use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use todo_types::models::{Todo, User};

use crate::{Result, Store, StoreError, UserRef};

impl Store {
    // -- Users --

    /// Register a new user. Usernames are unique across the store.
    pub fn create_user(&self, name: &str, username: &str) -> Result<User> {
        self.with_users(|users| {
            if users.iter().any(|u| u.username == username) {
                return Err(StoreError::UsernameTaken);
            }

            let user = User::new(name, username);
            users.push(user.clone());
            Ok(user)
        })
    }

    /// Exact, case-sensitive match. Only the identity is copied out.
    pub fn find_user_by_username(&self, username: &str) -> Result<Option<UserRef>> {
        self.with_users(|users| {
            Ok(users.iter().find(|u| u.username == username).map(|u| UserRef {
                id: u.id,
                username: u.username.clone(),
            }))
        })
    }

    pub fn user_count(&self) -> Result<usize> {
        self.with_users(|users| Ok(users.len()))
    }

    // -- Todos --

    pub fn list_todos(&self, user_id: Uuid) -> Result<Vec<Todo>> {
        self.with_users(|users| Ok(user_mut(users, user_id)?.todos.clone()))
    }

    pub fn append_todo(&self, user_id: Uuid, todo: Todo) -> Result<Todo> {
        self.with_users(|users| {
            let user = user_mut(users, user_id)?;
            user.todos.push(todo.clone());
            Ok(todo)
        })
    }

    /// Lookup is scoped to `user_id`'s own list; another user's todo with the
    /// same id is invisible here.
    pub fn find_todo(&self, user_id: Uuid, todo_id: Uuid) -> Result<Option<Todo>> {
        self.with_users(|users| {
            let user = user_mut(users, user_id)?;
            Ok(user.todos.iter().find(|t| t.id == todo_id).cloned())
        })
    }

    /// Overwrite `title` and `deadline`; `id`, `done` and `created_at` are kept.
    pub fn replace_todo(
        &self,
        user_id: Uuid,
        todo_id: Uuid,
        title: String,
        deadline: Option<DateTime<Utc>>,
    ) -> Result<Todo> {
        self.with_todo_mut(user_id, todo_id, |todo| {
            todo.title = title;
            todo.deadline = deadline;
        })
    }

    pub fn mark_done(&self, user_id: Uuid, todo_id: Uuid) -> Result<Todo> {
        self.with_todo_mut(user_id, todo_id, |todo| todo.done = true)
    }

    /// Drop every entry carrying `todo_id` from the user's list.
    pub fn remove_todo(&self, user_id: Uuid, todo_id: Uuid) -> Result<()> {
        self.with_users(|users| {
            let user = user_mut(users, user_id)?;
            let before = user.todos.len();
            user.todos.retain(|t| t.id != todo_id);

            if user.todos.len() == before {
                return Err(StoreError::TodoNotFound);
            }
            debug!("Removed {} todo(s) for user {}", before - user.todos.len(), user_id);
            Ok(())
        })
    }

    fn with_todo_mut<F>(&self, user_id: Uuid, todo_id: Uuid, f: F) -> Result<Todo>
    where
        F: FnOnce(&mut Todo),
    {
        self.with_users(|users| {
            let todo = user_mut(users, user_id)?
                .todos
                .iter_mut()
                .find(|t| t.id == todo_id)
                .ok_or(StoreError::TodoNotFound)?;
            f(todo);
            Ok(todo.clone())
        })
    }
}

fn user_mut(users: &mut [User], user_id: Uuid) -> Result<&mut User> {
    users
        .iter_mut()
        .find(|u| u.id == user_id)
        .ok_or(StoreError::UserNotFound)
}
