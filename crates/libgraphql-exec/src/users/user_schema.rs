use crate::resolver::resolver_fn;
use crate::resolver::ResolverError;
use crate::resolver::ResolverMap;
use crate::resolver::ResolverResult;
use crate::scalar::DateScalar;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::users::UserStore;
use crate::Value;
use std::sync::Arc;

pub const USER_SCHEMA_SDL: &str = "\
scalar Date

type User {
  id: Int!
  name: String!
  date: Date!
}

type Query {
  users(id: Int!): [User]
  user(id: Int!, name: String!): User
}

type Mutation {
  addUser(name: String!): User
}

schema {
  query: Query
  mutation: Mutation
}
";

/// Resolvers for the root fields of [`USER_SCHEMA_SDL`]. `User`'s own fields
/// are read straight off of the values these produce.
pub fn user_resolvers(store: Arc<dyn UserStore>) -> ResolverMap {
    let list_store = store.clone();
    let add_store = store;

    ResolverMap::new()
        // `id` is required by the schema but does not filter the listing.
        .with("Query", "users", resolver_fn(move |_parent, _args, _ctx| {
            let store = list_store.clone();
            async move {
                let users =
                    store.list_users().await
                        .map_err(|err| ResolverError::from_error(&err))?;
                ResolverResult::Ok(Value::from(users))
            }
        }))

        .with("Query", "user", resolver_fn(|_parent, args, _ctx| async move {
            ResolverResult::Ok(Value::object([
                ("id", Value::Int(args.i64("id")?)),
                ("name", Value::from(args.str("name")?)),
            ]))
        }))

        .with("Mutation", "addUser", resolver_fn(move |_parent, args, _ctx| {
            let store = add_store.clone();
            async move {
                let user =
                    store.add_user(args.str("name")?).await
                        .map_err(|err| ResolverError::from_error(&err))?;
                ResolverResult::Ok(Value::from(user))
            }
        }))
}

/// Builds the reference `users` schema over `store`.
pub fn user_schema(store: Arc<dyn UserStore>) -> Result<Schema, SchemaBuildError> {
    Schema::builder()
        .load_str(None, USER_SCHEMA_SDL)?
        .register_scalar(DateScalar)
        .resolvers(user_resolvers(store))
        .build()
}
