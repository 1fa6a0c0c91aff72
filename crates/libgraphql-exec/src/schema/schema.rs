use crate::execution;
use crate::execution::ExecutionResult;
use crate::operation::Operation;
use crate::operation::OperationKind;
use crate::resolver::RequestContext;
use crate::resolver::Resolver;
use crate::resolver::ResolverMap;
use crate::scalar::ScalarCodec;
use crate::schema::SchemaBuilder;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Represents a fully typechecked and immutable GraphQL schema, together with
/// the resolvers and scalar codecs needed to execute operations against it.
///
/// A [`Schema`] is built once (see [`SchemaBuilder`]) and is read-only
/// thereafter, so it can be shared across concurrently executing requests
/// (e.g. behind an [`Arc`]).
#[derive(Debug)]
pub struct Schema {
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: String,
    pub(crate) resolvers: ResolverMap,
    pub(crate) scalars: HashMap<String, Arc<dyn ScalarCodec>>,
    pub(crate) types: HashMap<String, GraphQLType>,
}
impl Schema {
    /// Returns a [`HashMap<String, GraphQLType>`] containing all types defined
    /// within this [`Schema`].
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in types like
    /// [`GraphQLType::Bool`].
    pub fn all_types(&self) -> &HashMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Executes `operation` against this schema. Shorthand for
    /// [`execution::execute()`].
    pub async fn execute(
        &self,
        operation: Operation,
        ctx: &RequestContext,
    ) -> ExecutionResult {
        execution::execute(self, operation, ctx).await
    }

    /// Looks up the declaration of `type_name.field_name` along with the
    /// resolver registered for it (if any).
    pub fn lookup_field(
        &self,
        type_name: &str,
        field_name: &str,
    ) -> Result<FieldLookup<'_>, UnknownFieldError> {
        let field =
            self.lookup_object_type(type_name)
                .and_then(|obj_type| obj_type.field(field_name))
                .ok_or_else(|| UnknownFieldError {
                    field_name: field_name.to_string(),
                    type_name: type_name.to_string(),
                })?;

        Ok(FieldLookup {
            field,
            resolver: self.resolvers.get(type_name, field_name),
        })
    }

    pub fn lookup_object_type(&self, type_name: &str) -> Option<&ObjectType> {
        self.types.get(type_name).and_then(GraphQLType::as_object)
    }

    /// Returns the [`ScalarCodec`] for the named scalar type. Built-in
    /// scalars (`Int`, `Float`, `String`, `Boolean`, `ID`) always have one.
    pub fn lookup_scalar(&self, type_name: &str) -> Option<&dyn ScalarCodec> {
        self.scalars.get(type_name).map(Arc::as_ref)
    }

    pub fn lookup_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.mutation_type
            .as_deref()
            .and_then(|type_name| self.lookup_object_type(type_name))
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// [^note] Prefer this over looking for an [`ObjectType`] named
    /// `"Query"`: the `schema { query: ... }` block may name a different
    /// type.
    pub fn query_type(&self) -> &ObjectType {
        self.lookup_object_type(self.query_type.as_str())
            .expect("root type is present in schema")
    }

    pub fn resolvers(&self) -> &ResolverMap {
        &self.resolvers
    }

    /// The name of the root type that serves operations of the given kind,
    /// if the schema supports that kind at all.
    pub fn root_type_name(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Query => Some(self.query_type.as_str()),
            OperationKind::Mutation => self.mutation_type.as_deref(),
        }
    }
}

/// The result of [`Schema::lookup_field()`].
#[derive(Clone, Copy)]
pub struct FieldLookup<'schema> {
    pub field: &'schema Field,
    pub resolver: Option<&'schema Arc<dyn Resolver>>,
}
impl<'schema> FieldLookup<'schema> {
    pub fn result_type(&self) -> &'schema TypeAnnotation {
        self.field.type_annotation()
    }
}
impl std::fmt::Debug for FieldLookup<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldLookup")
            .field("field", &self.field)
            .field("has_resolver", &self.resolver.is_some())
            .finish()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("Cannot query field `{field_name}` on type `{type_name}`")]
pub struct UnknownFieldError {
    pub field_name: String,
    pub type_name: String,
}
