use crate::users::User;
use async_trait::async_trait;
use thiserror::Error;

/// The collaborator the `users` resolvers read from and write to.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, UserStoreError>;

    async fn add_user(&self, name: &str) -> Result<User, UserStoreError>;
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum UserStoreError {
    #[error("The user store's lock was poisoned by a panicking writer")]
    LockPoisoned,
}
