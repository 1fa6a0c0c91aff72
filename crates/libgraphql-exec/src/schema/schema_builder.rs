use crate::ast;
use crate::loc;
use crate::operation::OperationKind;
use crate::resolver::Resolver;
use crate::resolver::ResolverMap;
use crate::scalar;
use crate::scalar::ScalarCodec;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::ObjectTypeBuilder;
use crate::types::ScalarType;
use crate::types::TypesMapBuilder;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [Schema].
///
/// Type definitions are loaded from SDL strings, custom scalars are given
/// their [`ScalarCodec`]s, and resolvers are registered per field. All
/// cross-cutting validation happens in [`SchemaBuilder::build()`].
#[derive(Debug)]
pub struct SchemaBuilder {
    mutation_type: Option<NamedTypeDefLocation>,
    object_builder: ObjectTypeBuilder,
    query_type: Option<NamedTypeDefLocation>,
    resolvers: ResolverMap,
    scalar_codecs: Vec<Arc<dyn ScalarCodec>>,
    types_map_builder: TypesMapBuilder,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        self.object_builder.finalize(&mut self.types_map_builder)?;
        let types = self.types_map_builder.into_types_map()?;

        let query_type = Self::resolve_root_type(
            &types,
            OperationKind::Query,
            self.query_type.take(),
        )?.ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;

        let mutation_type = Self::resolve_root_type(
            &types,
            OperationKind::Mutation,
            self.mutation_type.take(),
        )?;

        if let Some(mutation_type) = &mutation_type
            && mutation_type.type_name == query_type.type_name {
            return Err(SchemaBuildError::NonUniqueOperationTypes {
                reused_type_name: query_type.type_name.to_owned(),
                operation1: OperationKind::Query,
                operation1_loc: query_type.def_location.to_owned(),
                operation2: OperationKind::Mutation,
                operation2_loc: mutation_type.def_location.to_owned(),
            });
        }

        let scalars = Self::collect_scalar_codecs(&types, self.scalar_codecs)?;

        Self::validate_resolvers(
            &types,
            &self.resolvers,
            [
                Some((OperationKind::Query, &query_type)),
                mutation_type.as_ref().map(|t| (OperationKind::Mutation, t)),
            ].into_iter().flatten(),
        )?;

        tracing::debug!(
            num_types = types.len(),
            num_resolvers = self.resolvers.len(),
            num_scalars = scalars.len(),
            "built schema",
        );

        Ok(Schema {
            mutation_type: mutation_type.map(|t| t.type_name),
            query_type: query_type.type_name,
            resolvers: self.resolvers,
            scalars,
            types,
        })
    }

    pub fn new() -> Self {
        Self {
            mutation_type: None,
            object_builder: ObjectTypeBuilder::new(),
            query_type: None,
            resolvers: ResolverMap::new(),
            scalar_codecs: vec![],
            types_map_builder: TypesMapBuilder::new(),
        }
    }

    /// Loads SDL type definitions. `file_path` is only used to attribute
    /// definition locations (and may be `None` for SDL held in memory).
    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let ast_doc =
            ast::schema::parse(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_deref(), def)?;
        }

        Ok(self)
    }

    /// Registers the [`ScalarCodec`] for a custom scalar declared in the SDL.
    pub fn register_scalar(mut self, codec: impl ScalarCodec + 'static) -> Self {
        self.scalar_codecs.push(Arc::new(codec));
        self
    }

    /// Registers a single resolver for `type_name.field_name`.
    pub fn resolver(
        mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        resolver: Arc<dyn Resolver>,
    ) -> Self {
        self.resolvers.insert(type_name, field_name, resolver);
        self
    }

    /// Registers every resolver in `resolvers`, replacing any previously
    /// registered for the same field.
    pub fn resolvers(mut self, resolvers: ResolverMap) -> Self {
        for (type_name, field_name) in resolvers.keys() {
            if let Some(resolver) = resolvers.get(type_name, field_name) {
                self.resolvers.insert(type_name, field_name, resolver.clone());
            }
        }
        self
    }

    fn collect_scalar_codecs(
        types: &HashMap<String, GraphQLType>,
        custom_codecs: Vec<Arc<dyn ScalarCodec>>,
    ) -> Result<HashMap<String, Arc<dyn ScalarCodec>>> {
        let mut scalars: HashMap<String, Arc<dyn ScalarCodec>> =
            scalar::builtin_codecs()
                .into_iter()
                .map(|codec| (codec.name().to_string(), codec))
                .collect();
        let num_builtins = scalars.len();

        for codec in custom_codecs {
            let scalar_name = codec.name().to_string();
            match types.get(scalar_name.as_str()) {
                Some(GraphQLType::Scalar(_)) => (),

                Some(GraphQLType::Bool
                    | GraphQLType::Float
                    | GraphQLType::ID
                    | GraphQLType::Int
                    | GraphQLType::String) =>
                    return Err(SchemaBuildError::RedefinitionOfBuiltinScalar {
                        scalar_name,
                    }),

                Some(GraphQLType::Object(_)) | None =>
                    return Err(SchemaBuildError::ScalarCodecForUndeclaredType {
                        scalar_name,
                    }),
            }

            if scalars.contains_key(scalar_name.as_str()) {
                return Err(SchemaBuildError::DuplicateScalarCodec { scalar_name });
            }
            scalars.insert(scalar_name, codec);
        }

        let mut declared_scalars =
            types.values()
                .filter_map(GraphQLType::as_scalar)
                .collect::<Vec<_>>();
        declared_scalars.sort_by(|a, b| a.name().cmp(b.name()));
        for scalar_type in declared_scalars {
            if !scalars.contains_key(scalar_type.name()) {
                return Err(SchemaBuildError::MissingScalarCodec {
                    def_location: scalar_type.def_location().to_owned(),
                    scalar_name: scalar_type.name().to_string(),
                });
            }
        }

        tracing::trace!(
            "registered {} custom scalar codecs",
            scalars.len() - num_builtins,
        );
        Ok(scalars)
    }

    fn resolve_root_type(
        types: &HashMap<String, GraphQLType>,
        operation: OperationKind,
        declared: Option<NamedTypeDefLocation>,
    ) -> Result<Option<NamedTypeDefLocation>> {
        let root_type =
            if let Some(declared) = declared {
                match types.get(declared.type_name.as_str()) {
                    Some(GraphQLType::Object(_)) => declared,
                    _ => return Err(SchemaBuildError::InvalidRootOperationType {
                        operation,
                        type_name: declared.type_name,
                        def_location: declared.def_location,
                    }),
                }
            } else {
                match types.get(operation.default_root_type_name()) {
                    Some(GraphQLType::Object(obj_type)) => NamedTypeDefLocation {
                        def_location: obj_type.def_location().clone(),
                        type_name: obj_type.name().to_string(),
                    },
                    _ => return Ok(None),
                }
            };

        let has_fields =
            types.get(root_type.type_name.as_str())
                .and_then(GraphQLType::as_object)
                .is_some_and(|obj_type| !obj_type.fields().is_empty());
        if !has_fields {
            return Err(SchemaBuildError::EmptyRootOperationType {
                operation,
                type_name: root_type.type_name,
                def_location: root_type.def_location,
            });
        }

        Ok(Some(root_type))
    }

    fn validate_resolvers<'a>(
        types: &HashMap<String, GraphQLType>,
        resolvers: &ResolverMap,
        root_types: impl Iterator<Item = (OperationKind, &'a NamedTypeDefLocation)>,
    ) -> Result<()> {
        let mut resolver_keys = resolvers.keys().collect::<Vec<_>>();
        resolver_keys.sort();
        for (type_name, field_name) in resolver_keys {
            let field_declared =
                types.get(type_name)
                    .and_then(GraphQLType::as_object)
                    .is_some_and(|obj_type| obj_type.field(field_name).is_some());
            if !field_declared {
                return Err(SchemaBuildError::ResolverForUndefinedField {
                    field_name: field_name.to_string(),
                    type_name: type_name.to_string(),
                });
            }
        }

        for (operation, root_type) in root_types {
            let Some(obj_type) =
                types.get(root_type.type_name.as_str())
                    .and_then(GraphQLType::as_object) else {
                continue;
            };

            for field in obj_type.fields().values() {
                if resolvers.get(obj_type.name(), field.name()).is_none() {
                    return Err(SchemaBuildError::MissingRootFieldResolver {
                        def_location: field.def_location().to_owned(),
                        field_name: field.name().to_string(),
                        operation,
                        type_name: obj_type.name().to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    fn visit_ast_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) =>
                self.visit_ast_type_extension(file_path, type_ext),
            Definition::DirectiveDefinition(directive_def) =>
                Err(unsupported(
                    file_path,
                    directive_def.position,
                    format!("custom directive `@{}`", directive_def.name),
                )),
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        if let Some(type_name) = &schema_def.subscription {
            return Err(unsupported(
                file_path,
                schema_def.position,
                format!("subscription root type `{type_name}`"),
            ));
        }

        for (operation, type_name) in [
            (OperationKind::Query, &schema_def.query),
            (OperationKind::Mutation, &schema_def.mutation),
        ] {
            let Some(type_name) = type_name else {
                continue;
            };

            let typedef_loc = NamedTypeDefLocation::from_pos(
                type_name.to_string(),
                file_path,
                schema_def.position,
            );
            let slot =
                match operation {
                    OperationKind::Query => &mut self.query_type,
                    OperationKind::Mutation => &mut self.mutation_type,
                };
            if let Some(existing_typedef_loc) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing_typedef_loc.clone(),
                    location2: typedef_loc,
                });
            }
            *slot = Some(typedef_loc);
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Object(obj_def) =>
                self.object_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    obj_def,
                ),

            TypeDefinition::Scalar(scalar_def) => {
                let def_location: loc::SchemaDefLocation =
                    loc::FilePosition::from_pos(file_path, scalar_def.position).into();
                self.types_map_builder.add_new_type(
                    scalar_def.name.as_str(),
                    &def_location,
                    GraphQLType::Scalar(ScalarType {
                        def_location: def_location.clone(),
                        description: scalar_def.description.to_owned(),
                        name: scalar_def.name.to_string(),
                    }),
                )
            },

            TypeDefinition::Enum(def) => Err(unsupported(
                file_path,
                def.position,
                format!("enum type `{}`", def.name),
            )),

            TypeDefinition::InputObject(def) => Err(unsupported(
                file_path,
                def.position,
                format!("input object type `{}`", def.name),
            )),

            TypeDefinition::Interface(def) => Err(unsupported(
                file_path,
                def.position,
                format!("interface type `{}`", def.name),
            )),

            TypeDefinition::Union(def) => Err(unsupported(
                file_path,
                def.position,
                format!("union type `{}`", def.name),
            )),
        }
    }

    fn visit_ast_type_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        match ext {
            TypeExtension::Object(obj_ext) =>
                self.object_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    obj_ext,
                ),

            TypeExtension::Scalar(ext) => Err(unsupported(
                file_path,
                ext.position,
                format!("extension of scalar type `{}`", ext.name),
            )),

            TypeExtension::Enum(ext) => Err(unsupported(
                file_path,
                ext.position,
                format!("extension of enum type `{}`", ext.name),
            )),

            TypeExtension::InputObject(ext) => Err(unsupported(
                file_path,
                ext.position,
                format!("extension of input object type `{}`", ext.name),
            )),

            TypeExtension::Interface(ext) => Err(unsupported(
                file_path,
                ext.position,
                format!("extension of interface type `{}`", ext.name),
            )),

            TypeExtension::Union(ext) => Err(unsupported(
                file_path,
                ext.position,
                format!("extension of union type `{}`", ext.name),
            )),
        }
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn unsupported(
    file_path: Option<&Path>,
    pos: graphql_parser::Pos,
    description: String,
) -> SchemaBuildError {
    SchemaBuildError::UnsupportedDefinition {
        def_location: loc::FilePosition::from_pos(file_path, pos).into(),
        description,
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple fields with the same name were defined on a single object type")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SchemaDefLocation,
        field_def2: loc::SchemaDefLocation,
    },

    #[error("Multiple definitions of the same operation were defined")]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error(
        "The `{type_name}.{field_name}` field declares the `{param_name}` \
        parameter more than once"
    )]
    DuplicateParameterDefinition {
        type_name: String,
        field_name: String,
        param_name: String,
        param_def1: loc::SchemaDefLocation,
        param_def2: loc::SchemaDefLocation,
    },

    #[error("More than one codec was registered for the `{scalar_name}` scalar")]
    DuplicateScalarCodec {
        scalar_name: String,
    },

    #[error("Multiple GraphQL types with the same name were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error(
        "The {operation} root operation type `{type_name}` must define at least \
        one field"
    )]
    EmptyRootOperationType {
        operation: OperationKind,
        type_name: String,
        def_location: loc::SchemaDefLocation,
    },

    #[error("Attempted to extend a type that is not defined elsewhere")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_type_loc: loc::SchemaDefLocation,
    },

    #[error("The default value of the `{param_name}` parameter is invalid: {reason}")]
    InvalidDefaultValue {
        def_location: loc::SchemaDefLocation,
        param_name: String,
        reason: String,
    },

    #[error("Field names must not start with `__`")]
    InvalidDunderPrefixedFieldName {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        type_name: String,
    },

    #[error("Parameter names must not start with `__`")]
    InvalidDunderPrefixedParamName {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        param_name: String,
        type_name: String,
    },

    #[error("Type names must not start with `__`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SchemaDefLocation,
        type_name: String,
    },

    #[error(
        "Attempted to extend the non-object type `{type_name}` as an object type"
    )]
    InvalidExtensionType {
        extension_loc: loc::SchemaDefLocation,
        type_name: String,
    },

    #[error(
        "The {operation} root operation type `{type_name}` is not a defined \
        object type"
    )]
    InvalidRootOperationType {
        operation: OperationKind,
        type_name: String,
        def_location: loc::SchemaDefLocation,
    },

    #[error(
        "The `{type_name}.{field_name}` {operation} field has no resolver \
        registered"
    )]
    MissingRootFieldResolver {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        operation: OperationKind,
        type_name: String,
    },

    #[error("The `{scalar_name}` scalar is declared but no codec was registered for it")]
    MissingScalarCodec {
        def_location: loc::SchemaDefLocation,
        scalar_name: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error(
        "The {operation1} and {operation2} root operation are defined with \
        the same GraphQL type, but this is not allowed in GraphQL. All root \
        operations must be defined with different types."
    )]
    NonUniqueOperationTypes {
        reused_type_name: String,
        operation1: OperationKind,
        operation1_loc: loc::SchemaDefLocation,
        operation2: OperationKind,
        operation2_loc: loc::SchemaDefLocation,
    },

    #[error("Error parsing schema string")]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("Attempted to register a codec for the built-in `{scalar_name}` scalar")]
    RedefinitionOfBuiltinScalar {
        scalar_name: String,
    },

    #[error(
        "A resolver was registered for `{type_name}.{field_name}`, but no such \
        field is defined"
    )]
    ResolverForUndefinedField {
        field_name: String,
        type_name: String,
    },

    #[error(
        "A codec was registered for `{scalar_name}`, but no scalar type with \
        that name is declared"
    )]
    ScalarCodecForUndeclaredType {
        scalar_name: String,
    },

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },

    #[error("Unsupported schema definition: {description}")]
    UnsupportedDefinition {
        def_location: loc::SchemaDefLocation,
        description: String,
    },
}

/// Represents the file location of a given type's definition in the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SchemaDefLocation,
    pub type_name: String,
}
impl NamedTypeDefLocation {
    pub(crate) fn from_pos(
        type_name: String,
        file: Option<&Path>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(file, pos).into(),
            type_name,
        }
    }
}
