//! The reference `users` schema: a `Date` scalar, a `User` object type, and
//! the Query/Mutation fields that serve them from a [`UserStore`].

mod in_memory_user_store;
mod user;
mod user_schema;
mod user_store;

pub use in_memory_user_store::InMemoryUserStore;
pub use user::User;
pub use user_schema::USER_SCHEMA_SDL;
pub use user_schema::user_resolvers;
pub use user_schema::user_schema;
pub use user_store::UserStore;
pub use user_store::UserStoreError;

#[cfg(test)]
mod tests;
