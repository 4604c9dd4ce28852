use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;

/// Service layer for User domain rules.
///
/// Stateless; holds a shared reference to one repository so the storage
/// backend can be swapped without changing this contract.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new user.
    ///
    /// Payloads reaching this through HTTP have already passed schema
    /// validation; the normalization also covers direct callers, turning
    /// missing required fields into a Validation error.
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        let input = input
            .into_new_user()
            .ok_or_else(|| UserError::Validation("name and email are required".to_string()))?;

        self.repository.create(input).await
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: &str) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound)
    }

    /// List all users in insertion order
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    /// Update a user
    pub async fn update_user(&self, id: &str, input: UpdateUser) -> UserResult<User> {
        self.repository
            .update(id, input)
            .await?
            .ok_or(UserError::NotFound)
    }

    /// Delete a user
    pub async fn delete_user(&self, id: &str) -> UserResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(UserError::NotFound);
        }

        Ok(())
    }
}
