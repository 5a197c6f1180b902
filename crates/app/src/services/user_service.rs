//! User service — use-cases for managing household members.

use chorehub_domain::error::{ChoreHubError, NotFoundError};
use chorehub_domain::id::UserId;
use chorehub_domain::user::User;

use crate::ports::UserRepository;

/// Application service for user CRUD.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new user after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreHubError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn create_user(&self, user: User) -> Result<User, ChoreHubError> {
        user.validate()?;
        self.repo.create(user).await
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreHubError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_user(&self, id: UserId) -> Result<User, ChoreHubError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "User",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Look up a user by exact name.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_user_by_name(&self, name: &str) -> Result<Option<User>, ChoreHubError> {
        self.repo.get_by_name(name).await
    }

    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<User>, ChoreHubError> {
        self.repo.get_all().await
    }

    /// Delete a user by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_user(&self, id: UserId) -> Result<(), ChoreHubError> {
        self.repo.delete(id).await
    }
}
