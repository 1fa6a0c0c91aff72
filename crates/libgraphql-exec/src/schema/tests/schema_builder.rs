use crate::loc;
use crate::operation::OperationKind;
use crate::resolver::resolver_fn;
use crate::resolver::Resolver;
use crate::resolver::ResolverMap;
use crate::resolver::ResolverResult;
use crate::scalar::DateScalar;
use crate::scalar::IntScalar;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::Value;
use std::path::PathBuf;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn null_resolver() -> Arc<dyn Resolver> {
    resolver_fn(|_parent, _args, _ctx| async { ResolverResult::Ok(Value::Null) })
}

mod basics {
    use super::*;

    #[test]
    fn build_without_load() {
        let err = SchemaBuilder::new().build().unwrap_err();
        assert_eq!(err, SchemaBuildError::NoQueryOperationTypeDefined);
    }

    #[test]
    fn default_root_type_names() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { me: Int }\n",
                "type Mutation { poke: Boolean }\n",
            ))?
            .resolvers(
                ResolverMap::new()
                    .with("Query", "me", null_resolver())
                    .with("Mutation", "poke", null_resolver())
            )
            .build()?;

        assert_eq!(schema.query_type().name(), "Query");
        assert_eq!(schema.mutation_type().map(|t| t.name()), Some("Mutation"));
        assert_eq!(schema.root_type_name(OperationKind::Query), Some("Query"));
        assert_eq!(schema.root_type_name(OperationKind::Mutation), Some("Mutation"));
        assert_eq!(schema.resolvers().len(), 2);

        Ok(())
    }

    #[test]
    fn schema_block_renames_roots() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: RootQuery }\n",
                "type RootQuery { me: Int }\n",
                "type Mutation { poke: Boolean }\n",
            ))?
            .resolver("RootQuery", "me", null_resolver())
            .build()?;

        assert_eq!(schema.query_type().name(), "RootQuery");
        assert!(schema.mutation_type().is_none());
        assert_eq!(schema.root_type_name(OperationKind::Mutation), None);

        Ok(())
    }

    #[test]
    fn parse_error_carries_file_path() {
        let path = PathBuf::from("/tmp/users.graphql");
        let err = SchemaBuilder::new()
            .load_str(Some(path.clone()), "type Query {")
            .unwrap_err();

        assert!(matches!(
            err,
            SchemaBuildError::ParseError { file: Some(file), .. } if file == path,
        ));
    }

    #[test]
    fn definition_locations_are_recorded() -> Result<()> {
        let path = PathBuf::from("schema.graphql");
        let schema = SchemaBuilder::new()
            .load_str(Some(path.clone()), "\n\ntype Query { me: Int }")?
            .resolver("Query", "me", null_resolver())
            .build()?;

        let loc::SchemaDefLocation::Schema(pos) = schema.query_type().def_location() else {
            panic!("expected a schema location");
        };
        assert_eq!(pos.file, Some(path));
        assert_eq!(pos.line, 3);

        Ok(())
    }
}

mod root_types {
    use super::*;

    #[test]
    fn empty_root_type() -> Result<()> {
        let err = SchemaBuilder::new()
            .load_str(None, "type Query")?
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            SchemaBuildError::EmptyRootOperationType { operation: OperationKind::Query, .. },
        ));

        Ok(())
    }

    #[test]
    fn non_object_root_type() -> Result<()> {
        let err = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: Int }\n",
                "type Foo { bar: Int }\n",
            ))?
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            SchemaBuildError::InvalidRootOperationType { type_name, .. } if type_name == "Int",
        ));

        Ok(())
    }

    #[test]
    fn reused_root_type() -> Result<()> {
        let err = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: Root mutation: Root }\n",
                "type Root { me: Int }\n",
            ))?
            .resolver("Root", "me", null_resolver())
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            SchemaBuildError::NonUniqueOperationTypes { reused_type_name, .. }
                if reused_type_name == "Root",
        ));

        Ok(())
    }

    #[test]
    fn duplicate_schema_block_entries() -> Result<()> {
        let err = SchemaBuilder::new()
            .load_str(None, "schema { query: A }")?
            .load_str(None, "schema { query: B }")
            .unwrap_err();

        assert!(matches!(
            err,
            SchemaBuildError::DuplicateOperationDefinition { operation: OperationKind::Query, .. },
        ));

        Ok(())
    }
}

mod resolvers {
    use super::*;

    #[test]
    fn root_field_without_resolver() -> Result<()> {
        let err = SchemaBuilder::new()
            .load_str(None, "type Query { me: Int, you: Int }")?
            .resolver("Query", "me", null_resolver())
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            SchemaBuildError::MissingRootFieldResolver { field_name, .. } if field_name == "you",
        ));

        Ok(())
    }

    #[test]
    fn resolver_for_undeclared_field() -> Result<()> {
        let err = SchemaBuilder::new()
            .load_str(None, "type Query { me: Int }")?
            .resolver("Query", "me", null_resolver())
            .resolver("Query", "deleteUser", null_resolver())
            .build()
            .unwrap_err();

        assert_eq!(err, SchemaBuildError::ResolverForUndefinedField {
            field_name: "deleteUser".to_string(),
            type_name: "Query".to_string(),
        });

        Ok(())
    }

    #[test]
    fn nested_fields_may_omit_resolvers() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { me: User }\n",
                "type User { name: String }\n",
            ))?
            .resolver("Query", "me", null_resolver())
            .build()?;

        assert!(schema.resolvers().get("User", "name").is_none());

        Ok(())
    }
}

mod scalars {
    use super::*;

    #[test]
    fn declared_scalar_without_codec() -> Result<()> {
        let err = SchemaBuilder::new()
            .load_str(None, "scalar Date\ntype Query { today: Date }")?
            .resolver("Query", "today", null_resolver())
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            SchemaBuildError::MissingScalarCodec { scalar_name, .. } if scalar_name == "Date",
        ));

        Ok(())
    }

    #[test]
    fn codec_for_undeclared_scalar() -> Result<()> {
        let err = SchemaBuilder::new()
            .load_str(None, "type Query { me: Int }")?
            .resolver("Query", "me", null_resolver())
            .register_scalar(DateScalar)
            .build()
            .unwrap_err();

        assert_eq!(err, SchemaBuildError::ScalarCodecForUndeclaredType {
            scalar_name: "Date".to_string(),
        });

        Ok(())
    }

    #[test]
    fn codec_for_builtin_scalar() -> Result<()> {
        let err = SchemaBuilder::new()
            .load_str(None, "type Query { me: Int }")?
            .resolver("Query", "me", null_resolver())
            .register_scalar(IntScalar)
            .build()
            .unwrap_err();

        assert_eq!(err, SchemaBuildError::RedefinitionOfBuiltinScalar {
            scalar_name: "Int".to_string(),
        });

        Ok(())
    }

    #[test]
    fn duplicate_codec() -> Result<()> {
        let err = SchemaBuilder::new()
            .load_str(None, "scalar Date\ntype Query { today: Date }")?
            .resolver("Query", "today", null_resolver())
            .register_scalar(DateScalar)
            .register_scalar(DateScalar)
            .build()
            .unwrap_err();

        assert_eq!(err, SchemaBuildError::DuplicateScalarCodec {
            scalar_name: "Date".to_string(),
        });

        Ok(())
    }

    #[test]
    fn registered_codec_is_looked_up_by_name() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "scalar Date\ntype Query { today: Date }")?
            .resolver("Query", "today", null_resolver())
            .register_scalar(DateScalar)
            .build()?;

        assert_eq!(schema.lookup_scalar("Date").map(|codec| codec.name()), Some("Date"));
        assert!(schema.lookup_type("Date").is_some_and(|t| t.as_scalar().is_some()));

        Ok(())
    }
}

mod unsupported_definitions {
    use super::*;

    #[test]
    fn rejected_definitions() {
        for sdl in [
            "enum Color { RED }",
            "input Filter { id: Int }",
            "interface Node { id: ID }",
            "union Thing = A | B",
            "directive @cached on FIELD_DEFINITION",
            "schema { query: Query subscription: Subscription }",
            "extend scalar Date @foo",
        ] {
            let err = SchemaBuilder::new().load_str(None, sdl).unwrap_err();
            assert!(
                matches!(err, SchemaBuildError::UnsupportedDefinition { .. }),
                "sdl: {sdl}, err: {err:?}",
            );
        }
    }
}
