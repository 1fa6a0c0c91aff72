use crate::users::User;
use crate::users::UserStore;
use crate::users::UserStoreError;
use async_trait::async_trait;
use std::sync::RwLock;

/// A [`UserStore`] backed by a process-local list.
///
/// This reproduces the behavior of the reference server rather than
/// a "real" store: [`UserStore::add_user()`] always answers with id `2` and
/// does not append to the list, and [`UserStore::list_users()`] returns the
/// full list regardless of any filter the caller was given.
#[derive(Debug)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}
impl InMemoryUserStore {
    pub const ADDED_USER_ID: i64 = 2;

    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// A store holding the two seed authors.
    pub fn seeded() -> Self {
        let mut rowling = User::new(1, "J.K. Rowling");
        if let Some(date) = User::local_midnight(2018, 6, 20) {
            rowling = rowling.with_date(date);
        }

        let mut crichton = User::new(2, "Michael Crichton");
        if let Some(date) = User::local_midnight(2018, 6, 21) {
            crichton = crichton.with_date(date);
        }

        Self::new(vec![rowling, crichton])
    }

    /// Appends `user` to the listing.
    pub fn push(&self, user: User) -> Result<(), UserStoreError> {
        self.users
            .write()
            .map_err(|_| UserStoreError::LockPoisoned)?
            .push(user);
        Ok(())
    }
}
impl std::default::Default for InMemoryUserStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list_users(&self) -> Result<Vec<User>, UserStoreError> {
        self.users
            .read()
            .map(|users| users.to_owned())
            .map_err(|_| UserStoreError::LockPoisoned)
    }

    async fn add_user(&self, name: &str) -> Result<User, UserStoreError> {
        tracing::debug!("add_user({name}) is not persisted");
        Ok(User::new(Self::ADDED_USER_ID, name))
    }
}
