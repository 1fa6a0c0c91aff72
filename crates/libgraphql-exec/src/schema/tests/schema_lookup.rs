use crate::schema::Schema;
use crate::schema::UnknownFieldError;
use crate::users::user_schema;
use crate::users::InMemoryUserStore;
use std::sync::Arc;

fn users_schema() -> Schema {
    user_schema(Arc::new(InMemoryUserStore::seeded())).unwrap()
}

#[test]
fn schema_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Schema>();
}

#[test]
fn lookup_root_field() {
    let schema = users_schema();

    let lookup = schema.lookup_field("Query", "user").unwrap();
    assert!(lookup.resolver.is_some());
    assert_eq!(lookup.field.name(), "user");
    assert_eq!(lookup.result_type().to_string(), "User");
    assert_eq!(
        lookup.field.parameters().keys().collect::<Vec<_>>(),
        vec!["id", "name"],
    );

    let lookup = schema.lookup_field("Query", "users").unwrap();
    assert_eq!(lookup.result_type().to_string(), "[User]");
}

#[test]
fn lookup_nested_field_without_resolver() {
    let schema = users_schema();

    let lookup = schema.lookup_field("User", "date").unwrap();
    assert!(lookup.resolver.is_none());
    assert_eq!(lookup.result_type().to_string(), "Date!");
}

#[test]
fn lookup_unknown_field() {
    let schema = users_schema();

    let err = schema.lookup_field("Query", "deleteUser").unwrap_err();
    assert_eq!(err, UnknownFieldError {
        field_name: "deleteUser".to_string(),
        type_name: "Query".to_string(),
    });
    assert_eq!(err.to_string(), "Cannot query field `deleteUser` on type `Query`");

    assert!(schema.lookup_field("Nope", "user").is_err());
    assert!(schema.lookup_field("Int", "user").is_err());
}

#[test]
fn lookup_scalar() {
    let schema = users_schema();

    assert_eq!(schema.lookup_scalar("Date").map(|codec| codec.name()), Some("Date"));
    assert_eq!(schema.lookup_scalar("Int").map(|codec| codec.name()), Some("Int"));
    assert!(schema.lookup_scalar("User").is_none());
}
