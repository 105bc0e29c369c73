//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::User;
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn list_users(&self) -> AppResult<Vec<User>>;

    async fn get_user(&self, id: i64) -> AppResult<User>;

    async fn save_user(&self, user: User) -> AppResult<User>;

    async fn update_user(&self, user: User) -> AppResult<User>;

    async fn delete_user(&self, id: i64) -> AppResult<()>;

    /// Save every user in order; earlier saves are kept if a later one fails
    async fn save_users(&self, users: Vec<User>) -> AppResult<Vec<User>>;

    async fn get_by_username(&self, username: &str) -> AppResult<User>;

    async fn update_by_username(&self, user: User, username: &str) -> AppResult<User>;

    async fn delete_by_username(&self, username: &str) -> AppResult<()>;

    /// Returns the success message on a password match
    async fn login(&self, username: &str, password: &str) -> AppResult<String>;

    async fn logout(&self) -> AppResult<String>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.uow.users().list())
    }

    async fn get_user(&self, id: i64) -> AppResult<User> {
        self.uow.users().get_by_id(id)
    }

    async fn save_user(&self, user: User) -> AppResult<User> {
        let user = self.uow.users().save(user);
        tracing::info!(user_id = user.id, "User saved");
        Ok(user)
    }

    async fn update_user(&self, user: User) -> AppResult<User> {
        self.uow.users().update(user)
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        self.uow.users().delete_by_id(id)?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    async fn save_users(&self, users: Vec<User>) -> AppResult<Vec<User>> {
        let users = self.uow.users().save_all(users);
        tracing::info!(count = users.len(), "Users saved");
        Ok(users)
    }

    async fn get_by_username(&self, username: &str) -> AppResult<User> {
        self.uow.users().get_by_username(username)
    }

    async fn update_by_username(&self, user: User, username: &str) -> AppResult<User> {
        self.uow.users().update_by_username(user, username)
    }

    async fn delete_by_username(&self, username: &str) -> AppResult<()> {
        self.uow.users().delete_by_username(username)?;
        tracing::info!(username, "User deleted");
        Ok(())
    }

    async fn login(&self, username: &str, password: &str) -> AppResult<String> {
        self.uow.users().login(username, password).map_err(|e| {
            tracing::warn!(username, "Login rejected");
            e
        })
    }

    async fn logout(&self) -> AppResult<String> {
        Ok(self.uow.users().logout())
    }
}
