use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::{NewUser, UpdateUser, User};

/// Repository trait for User persistence
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user under a freshly generated id
    async fn create(&self, input: NewUser) -> UserResult<User>;

    /// Get a user by ID
    async fn get_by_id(&self, id: &str) -> UserResult<Option<User>>;

    /// List all users in insertion order
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Merge the present fields of `update` over an existing record.
    ///
    /// `None` when no record exists for `id` (absence, not an error).
    async fn update(&self, id: &str, update: UpdateUser) -> UserResult<Option<User>>;

    /// Delete a user by ID, reporting whether a record was removed
    async fn delete(&self, id: &str) -> UserResult<bool>;
}

/// In-memory implementation of UserRepository.
///
/// Records live in a vector so `list` returns insertion order. Ids are
/// random UUID v4 strings, generated here and never reused. A
/// database-backed adapter can replace this behind the same trait. Every
/// operation acquires the lock once and never awaits while holding it, so
/// operations on the same id are serialized.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, input: NewUser) -> UserResult<User> {
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            age: input.age,
        };

        let mut users = self.users.write().await;
        users.push(user.clone());

        tracing::info!(user_id = %user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn list(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn update(&self, id: &str, update: UpdateUser) -> UserResult<Option<User>> {
        let mut users = self.users.write().await;

        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };

        user.apply_update(update);

        tracing::info!(user_id = %id, "Updated user");
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: &str) -> UserResult<bool> {
        let mut users = self.users.write().await;

        let before = users.len();
        users.retain(|u| u.id != id);
        let removed = users.len() < before;

        if removed {
            tracing::info!(user_id = %id, "Deleted user");
        }
        Ok(removed)
    }
}
