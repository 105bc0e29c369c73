//! User repository with username lookups and password login.

use super::base::{DeleteRepository, ReadRepository, StoreBacked, WriteRepository};
use super::memory::MemoryStore;
use crate::config::{KIND_USER, LOGIN_SUCCESS, LOGOUT_SUCCESS};
use crate::domain::User;
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

fn username_not_found(username: &str) -> String {
    format!("There is no {} with username {}", KIND_USER, username)
}

/// User repository trait for dependency injection.
///
/// Username lookups scan in insertion order and resolve the first match;
/// uniqueness of usernames is not enforced on save.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository: Send + Sync {
    /// All users, in insertion order
    fn list(&self) -> Vec<User>;

    /// Find user by id
    fn get_by_id(&self, id: i64) -> AppResult<User>;

    /// Insert or overwrite by id
    fn save(&self, user: User) -> User;

    /// Overwrite an existing user
    fn update(&self, user: User) -> AppResult<User>;

    /// Delete user by id
    fn delete_by_id(&self, id: i64) -> AppResult<()>;

    /// Save each user in order. Not atomic: there is no rollback.
    fn save_all(&self, users: Vec<User>) -> Vec<User>;

    /// Find user by username
    fn get_by_username(&self, username: &str) -> AppResult<User>;

    /// Overwrite the user currently named `username`, keeping its id.
    /// The incoming record may rename the user.
    fn update_by_username(&self, user: User, username: &str) -> AppResult<User>;

    /// Delete user by username
    fn delete_by_username(&self, username: &str) -> AppResult<()>;

    /// Check `password` against the stored one by plain equality
    fn login(&self, username: &str, password: &str) -> AppResult<String>;

    /// No session is tracked; always succeeds
    fn logout(&self) -> String;

    /// Number of stored users
    fn count(&self) -> usize;
}

/// In-memory implementation of UserRepository
#[derive(Default)]
pub struct UserStore {
    store: MemoryStore<User>,
}

impl UserStore {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `users`
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            store: MemoryStore::with_entries(users),
        }
    }
}

impl StoreBacked<User> for UserStore {
    fn store(&self) -> &MemoryStore<User> {
        &self.store
    }
}

impl UserRepository for UserStore {
    fn list(&self) -> Vec<User> {
        self.find_all()
    }

    fn get_by_id(&self, id: i64) -> AppResult<User> {
        self.find_by_id(id)
    }

    fn save(&self, user: User) -> User {
        tracing::debug!(user_id = user.id, "Saving user");
        self.insert(user)
    }

    fn update(&self, user: User) -> AppResult<User> {
        self.replace(user)
    }

    fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.remove_by_id(id).map(|_| ())
    }

    fn save_all(&self, users: Vec<User>) -> Vec<User> {
        users.into_iter().map(|user| self.save(user)).collect()
    }

    fn get_by_username(&self, username: &str) -> AppResult<User> {
        self.store
            .find(|user| user.username == username)
            .ok_or_not_found(|| username_not_found(username))
    }

    fn update_by_username(&self, user: User, username: &str) -> AppResult<User> {
        self.store
            .modify_first(
                |stored| stored.username == username,
                |stored| *stored = User { id: stored.id, ..user },
            )
            .ok_or_not_found(|| username_not_found(username))
    }

    fn delete_by_username(&self, username: &str) -> AppResult<()> {
        self.store
            .remove_first(|user| user.username == username)
            .map(|_| ())
            .ok_or_not_found(|| username_not_found(username))
    }

    fn login(&self, username: &str, password: &str) -> AppResult<String> {
        let user = self.get_by_username(username)?;
        if user.password != password {
            return Err(AppError::InvalidCredentials(format!(
                "Invalid credentials for username {} and password {}",
                username, password
            )));
        }
        Ok(LOGIN_SUCCESS.to_string())
    }

    fn logout(&self) -> String {
        LOGOUT_SUCCESS.to_string()
    }

    fn count(&self) -> usize {
        self.count_all()
    }
}
