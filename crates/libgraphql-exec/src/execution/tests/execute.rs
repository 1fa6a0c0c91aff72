use crate::execution::tests::test_utils::library_schema;
use crate::execution::tests::test_utils::JUNE_20_2018_UTC_MILLIS;
use crate::execution::execute;
use crate::execution::ExecutionResult;
use crate::execution::PathSegment;
use crate::literal::Literal;
use crate::operation::FieldSelection;
use crate::operation::Operation;
use crate::resolver::RequestContext;
use crate::users::user_schema;
use crate::users::InMemoryUserStore;
use crate::users::User;
use crate::Schema;
use serde_json::json;
use std::sync::Arc;

fn users_schema() -> Schema {
    user_schema(Arc::new(InMemoryUserStore::seeded())).unwrap()
}

async fn run_document(schema: &Schema, document: &str, variables: serde_json::Value) -> ExecutionResult {
    let serde_json::Value::Object(variables) = variables else {
        panic!("variables must be an object");
    };
    let operation = Operation::from_document(document, &variables, None).unwrap();
    execute(schema, operation, &RequestContext::new()).await
}

fn path(segments: &[serde_json::Value]) -> Vec<PathSegment> {
    segments.iter()
        .map(|segment| match segment {
            serde_json::Value::String(name) => PathSegment::from(name.as_str()),
            serde_json::Value::Number(idx) => PathSegment::from(idx.as_u64().unwrap() as usize),
            other => panic!("invalid path segment: {other}"),
        })
        .collect()
}

mod users_schema {
    use super::*;

    #[tokio::test]
    async fn user_query() {
        let schema = users_schema();
        let result = execute(
            &schema,
            Operation::query("user")
                .with_argument("id", Literal::Int(1))
                .with_argument("name", Literal::from("Ada")),
            &RequestContext::new(),
        ).await;

        assert!(result.is_ok());
        assert_eq!(serde_json::to_value(&result).unwrap(), json!({ "data": { "user": { "id": 1, "name": "Ada" } } }));
    }

    #[tokio::test]
    async fn users_query_lists_seed_data() {
        let schema = users_schema();
        let result = run_document(&schema, "{ users(id: 2) }", json!({})).await;

        let rowling_millis = User::local_midnight(2018, 6, 20).unwrap().timestamp_millis();
        let crichton_millis = User::local_midnight(2018, 6, 21).unwrap().timestamp_millis();
        assert_eq!(serde_json::to_value(&result).unwrap(), json!({
            "data": {
                "users": [
                    { "id": 1, "name": "J.K. Rowling", "date": rowling_millis },
                    { "id": 2, "name": "Michael Crichton", "date": crichton_millis },
                ],
            },
        }));
    }

    #[tokio::test]
    async fn users_query_with_selection_set() {
        let schema = users_schema();
        let result = run_document(
            &schema,
            "query ($id: Int!) { people: users(id: $id) { name } }",
            json!({ "id": 1 }),
        ).await;

        assert_eq!(serde_json::to_value(&result).unwrap(), json!({
            "data": {
                "people": [{ "name": "J.K. Rowling" }, { "name": "Michael Crichton" }],
            },
        }));
    }

    #[tokio::test]
    async fn add_user_mutation() {
        let schema = users_schema();
        let result = run_document(
            &schema,
            r#"mutation { addUser(name: "Ada") }"#,
            json!({}),
        ).await;

        assert_eq!(serde_json::to_value(&result).unwrap(), json!({ "data": { "addUser": { "id": 2, "name": "Ada" } } }));
    }

    #[tokio::test]
    async fn unknown_root_field_has_no_data() {
        let schema = users_schema();
        let result = execute(
            &schema,
            Operation::query("deleteUser").with_argument("id", Literal::Int(1)),
            &RequestContext::new(),
        ).await;

        assert!(result.data.is_none());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code(), "GRAPHQL_VALIDATION_FAILED");
        assert_eq!(result.errors[0].path, path(&[json!("deleteUser")]));

        let payload = serde_json::to_value(&result).unwrap();
        assert!(payload.get("data").is_none());
        assert_eq!(payload["errors"][0]["path"], json!(["deleteUser"]));
        assert_eq!(payload["errors"][0]["extensions"], json!({ "code": "GRAPHQL_VALIDATION_FAILED" }));
    }

    #[tokio::test]
    async fn missing_argument_has_no_data() {
        let schema = users_schema();
        let result = execute(&schema, Operation::query("users"), &RequestContext::new()).await;

        assert!(result.data.is_none());
        assert_eq!(
            result.errors[0].message,
            "The `Query.users` field requires the `id` argument of type `Int!`, but it was \
            not provided",
        );
    }

    #[tokio::test]
    async fn mutation_field_queried_as_query() {
        let schema = users_schema();
        let result = execute(
            &schema,
            Operation::query("addUser").with_argument("name", Literal::from("Ada")),
            &RequestContext::new(),
        ).await;

        assert!(result.data.is_none());
        assert_eq!(result.errors[0].message, "Cannot query field `addUser` on type `Query`");
    }

    #[tokio::test]
    async fn concurrent_requests_share_one_schema() {
        let schema = Arc::new(users_schema());
        let tasks =
            (0..16).map(|idx| {
                let schema = schema.clone();
                tokio::spawn(async move {
                    let name = format!("user-{idx}");
                    let result = schema.execute(
                        Operation::query("user")
                            .with_argument("id", Literal::Int(idx))
                            .with_argument("name", Literal::from(name.as_str())),
                        &RequestContext::new(),
                    ).await;
                    (idx, name, result)
                })
            }).collect::<Vec<_>>();

        for task in tasks {
            let (idx, name, result) = task.await.unwrap();
            assert_eq!(serde_json::to_value(&result).unwrap(), json!({ "data": { "user": { "id": idx, "name": name } } }));
        }
    }
}

mod completion {
    use super::*;

    #[tokio::test]
    async fn aliases_and_typename() {
        let schema = library_schema();
        let result = run_document(
            &schema,
            "{ novel: book(id: 1) { ident: id title __typename author { name } } }",
            json!({}),
        ).await;

        assert_eq!(serde_json::to_value(&result).unwrap(), json!({
            "data": {
                "novel": {
                    "ident": "1",
                    "title": "Jurassic Park",
                    "__typename": "Book",
                    "author": { "name": "Michael Crichton" },
                },
            },
        }));
    }

    #[tokio::test]
    async fn implicit_selection_emits_present_fields() {
        let schema = library_schema();
        let result = run_document(&schema, "{ book(id: 1) }", json!({})).await;

        assert!(result.is_ok());
        assert_eq!(serde_json::to_value(&result).unwrap(), json!({
            "data": {
                "book": {
                    "id": "1",
                    "title": "Jurassic Park",
                    "tags": ["dinos", "islands"],
                    "author": { "name": "Michael Crichton" },
                    "publishedOn": JUNE_20_2018_UTC_MILLIS,
                },
            },
        }));
    }

    #[tokio::test]
    async fn null_object_result() {
        let schema = library_schema();
        let result = run_document(&schema, "{ book(id: 99) { title } }", json!({})).await;

        assert_eq!(serde_json::to_value(&result).unwrap(), json!({ "data": { "book": null } }));
    }

    #[tokio::test]
    async fn non_null_violation_nulls_nearest_nullable_parent() {
        let schema = library_schema();
        let result = run_document(&schema, "{ book(id: 2) { id title } }", json!({})).await;

        assert_eq!(result.data, Some(json!({ "book": null })));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].path, path(&[json!("book"), json!("title")]));
        assert_eq!(
            result.errors[0].message,
            "Cannot return null for non-nullable field `Book.title`",
        );
    }

    #[tokio::test]
    async fn nullable_nested_object_absorbs_violation() {
        let schema = library_schema();
        let result = run_document(&schema, "{ book(id: 3) { title author { name } } }", json!({})).await;

        assert_eq!(result.data, Some(json!({
            "book": { "title": "Jurassic Park", "author": null },
        })));
        assert_eq!(result.errors[0].path, path(&[json!("book"), json!("author"), json!("name")]));
    }

    #[tokio::test]
    async fn violation_in_list_item_nulls_the_list() {
        let schema = library_schema();
        let result = run_document(&schema, "{ books { title } }", json!({})).await;

        assert_eq!(result.data, Some(json!({ "books": null })));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].path, path(&[json!("books"), json!(1), json!("title")]));
    }

    #[tokio::test]
    async fn nested_resolver_failure_keeps_siblings() {
        let schema = library_schema();
        let result = run_document(&schema, "{ book(id: 1) { title rating } }", json!({})).await;

        assert_eq!(result.data, Some(json!({
            "book": { "title": "Jurassic Park", "rating": null },
        })));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].message, "ratings are unavailable");
        assert_eq!(result.errors[0].code(), "RESOLVER_ERROR");
        assert_eq!(result.errors[0].path, path(&[json!("book"), json!("rating")]));
    }

    #[tokio::test]
    async fn unknown_nested_field() {
        let schema = library_schema();
        let result = run_document(&schema, "{ book(id: 1) { title isbn } }", json!({})).await;

        assert_eq!(result.data, Some(json!({
            "book": { "title": "Jurassic Park", "isbn": null },
        })));
        assert_eq!(result.errors[0].code(), "GRAPHQL_VALIDATION_FAILED");
    }

    #[tokio::test]
    async fn root_non_null_violation_has_no_data() {
        let schema = library_schema();
        let result = run_document(&schema, "{ brokenTitle }", json!({})).await;

        assert!(result.data.is_none());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code(), "INTERNAL_SERVER_ERROR");
    }

    #[tokio::test]
    async fn root_resolver_failure_has_no_data() {
        let schema = library_schema();
        let result = run_document(&schema, "{ failing }", json!({})).await;

        assert_eq!(serde_json::to_value(&result).unwrap(), json!({
            "errors": [{
                "message": "boom",
                "path": ["failing"],
                "extensions": { "code": "RESOLVER_ERROR" },
            }],
        }));
    }

    #[tokio::test]
    async fn selection_on_leaf_field() {
        let schema = library_schema();
        let result = execute(
            &schema,
            Operation::query("greet").with_selection_set(vec![FieldSelection::new("length")]),
            &RequestContext::new(),
        ).await;

        assert!(result.data.is_none());
        assert_eq!(
            result.errors[0].message,
            "The `Query.greet` field is of type `String!`, which has no subfields to select",
        );
    }

    #[tokio::test]
    async fn date_variables_round_trip() {
        let schema = library_schema();
        let result = run_document(
            &schema,
            "query ($dates: [Date!]!) { echoDates(dates: $dates) }",
            json!({ "dates": ["2018-06-20", 0] }),
        ).await;

        assert_eq!(serde_json::to_value(&result).unwrap(), json!({
            "data": { "echoDates": [JUNE_20_2018_UTC_MILLIS, 0] },
        }));
    }
}

mod operations {
    use super::*;

    #[tokio::test]
    async fn schema_without_mutation_root() {
        let schema = library_schema();
        let result = execute(&schema, Operation::mutation("greet"), &RequestContext::new()).await;

        assert!(result.data.is_none());
        assert_eq!(result.errors[0].message, "The schema does not support mutation operations");
        assert!(result.errors[0].path.is_empty());
    }

    #[tokio::test]
    async fn resolvers_see_context_and_operation_kind() {
        let schema = library_schema();
        let result = execute(
            &schema,
            Operation::query("whoami"),
            &RequestContext::with_data("ada".to_string()),
        ).await;

        assert_eq!(serde_json::to_value(&result).unwrap(), json!({ "data": { "whoami": "ada (query)" } }));
    }
}

mod variable_validation {
    use super::*;
    use crate::execution::tests::test_utils::counting_users_schema;
    use std::sync::atomic::Ordering;

    fn assert_rejected(result: &ExecutionResult, messages: &[&str]) {
        assert!(result.data.is_none(), "unexpected data: {:?}", result.data);
        assert_eq!(
            result.errors.iter().map(|err| err.message.as_str()).collect::<Vec<_>>(),
            messages,
        );
        for err in &result.errors {
            assert_eq!(err.code(), "GRAPHQL_VALIDATION_FAILED");
            assert!(err.path.is_empty());
        }
    }

    #[tokio::test]
    async fn variable_type_must_match_argument_type() {
        let schema = users_schema();
        let result = run_document(
            &schema,
            r#"query ($id: String!) { user(id: $id, name: "Ada") }"#,
            json!({ "id": 1 }),
        ).await;

        assert_rejected(&result, &[
            "The `$id` variable of type `String!` cannot be used for the `id` \
            argument of `Query.user`, which expects `Int!`",
        ]);
    }

    #[tokio::test]
    async fn variable_type_must_be_declared() {
        let schema = users_schema();
        let result = run_document(
            &schema,
            r#"query ($id: Bogus) { user(id: $id, name: "Ada") }"#,
            json!({ "id": 1 }),
        ).await;

        assert_rejected(&result, &["Unknown type `Bogus` for the `$id` variable"]);
    }

    #[tokio::test]
    async fn unused_variables_are_still_checked() {
        let schema = users_schema();
        let result = run_document(
            &schema,
            "query ($who: User, $when: Timestamp) { users(id: 1) }",
            json!({}),
        ).await;

        assert_rejected(&result, &[
            "The `$who` variable cannot be of type `User`, which is not an input type",
            "Unknown type `Timestamp` for the `$when` variable",
        ]);
    }

    #[tokio::test]
    async fn nullable_variable_needs_a_default_for_non_null_argument() {
        let schema = users_schema();
        let result = run_document(
            &schema,
            "query ($id: Int) { users(id: $id) { name } }",
            json!({ "id": 1 }),
        ).await;
        assert_rejected(&result, &[
            "The `$id` variable of type `Int` cannot be used for the `id` \
            argument of `Query.users`, which expects `Int!`",
        ]);

        let result = run_document(
            &schema,
            "query ($id: Int = 1) { users(id: $id) { name } }",
            json!({}),
        ).await;
        assert!(result.is_ok(), "errors: {:?}", result.errors);
    }

    #[tokio::test]
    async fn non_null_variable_fits_nullable_argument() {
        let schema = library_schema();
        let result = run_document(
            &schema,
            "query ($name: String!, $excited: Boolean!) { greet(name: $name, excited: $excited) }",
            json!({ "name": "Ada", "excited": true }),
        ).await;

        assert_eq!(serde_json::to_value(&result).unwrap(), json!({ "data": { "greet": "Hello, Ada!" } }));
    }

    #[tokio::test]
    async fn list_variables_compare_item_types() {
        let schema = library_schema();
        for (document, variable_type) in [
            ("query ($dates: [Date]!) { echoDates(dates: $dates) }", "[Date]!"),
            ("query ($dates: Date!) { echoDates(dates: $dates) }", "Date!"),
            ("query ($dates: [Int!]!) { echoDates(dates: $dates) }", "[Int!]!"),
        ] {
            let result = run_document(
                &schema,
                document,
                json!({ "dates": [JUNE_20_2018_UTC_MILLIS] }),
            ).await;
            assert_rejected(&result, &[format!(
                "The `$dates` variable of type `{variable_type}` cannot be used for \
                the `dates` argument of `Query.echoDates`, which expects `[Date!]!`",
            ).as_str()]);
        }
    }

    #[tokio::test]
    async fn rejected_operations_run_no_resolvers() {
        let (schema, calls) = counting_users_schema();
        let result = run_document(
            &schema,
            "query ($id: ID!) { users(id: $id) }",
            json!({ "id": "1" }),
        ).await;

        assert_eq!(result.errors.len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
