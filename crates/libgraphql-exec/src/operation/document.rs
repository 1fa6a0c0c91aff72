use crate::ast;
use crate::execution::ErrorExtensions;
use crate::execution::GraphQLError;
use crate::literal::Literal;
use crate::literal::LiteralFromAstError;
use crate::loc;
use crate::operation::FieldSelection;
use crate::operation::Operation;
use crate::operation::OperationKind;
use crate::operation::RawArgument;
use crate::operation::VariableDefinition;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

type Result<T> = std::result::Result<T, DocumentError>;

/// Problems turning a query document into an [`Operation`].
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DocumentError {
    #[error("The `{field_name}` field is given the `{argument_name}` argument more than once")]
    DuplicateArgument {
        argument_name: String,
        field_name: String,
    },

    #[error("The `${variable_name}` variable is declared more than once")]
    DuplicateVariable {
        variable_name: String,
    },

    #[error("Invalid literal for the `{argument_name}` argument: {reason}")]
    InvalidLiteral {
        argument_name: String,
        reason: String,
    },

    #[error(
        "The document defines {num_operations} operations; an operation name \
        is required to pick one"
    )]
    MultipleOperations {
        num_operations: usize,
    },

    #[error(
        "Operations may select exactly one root field, but {num_fields} were \
        selected"
    )]
    MultipleRootFields {
        num_fields: usize,
    },

    #[error(
        "The `{argument_name}` argument references `${variable_name}` inside a \
        list or object literal, which is not supported"
    )]
    NestedVariableReference {
        argument_name: String,
        variable_name: String,
    },

    #[error("The document does not define any operations")]
    NoOperations,

    #[error("No operation named `{operation_name}` is defined in the document")]
    OperationNotFound {
        operation_name: String,
    },

    #[error("Error parsing query document: {0}")]
    ParseError(String),

    #[error("The `${variable_name}` variable is used but never declared")]
    UndefinedVariable {
        variable_name: String,
    },

    #[error("Unsupported document construct: {0}")]
    Unsupported(String),
}
impl DocumentError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ParseError(_) => "GRAPHQL_PARSE_FAILED",
            Self::DuplicateArgument { .. }
            | Self::DuplicateVariable { .. }
            | Self::InvalidLiteral { .. }
            | Self::MultipleOperations { .. }
            | Self::MultipleRootFields { .. }
            | Self::NestedVariableReference { .. }
            | Self::NoOperations
            | Self::OperationNotFound { .. }
            | Self::UndefinedVariable { .. }
            | Self::Unsupported(_) => "GRAPHQL_VALIDATION_FAILED",
        }
    }

    /// Reports this error the same way execution errors are reported, so
    /// that transports can answer with a uniform `{"errors": [...]}` payload.
    pub fn to_graphql_error(&self) -> GraphQLError {
        GraphQLError {
            message: self.to_string(),
            path: vec![],
            extensions: ErrorExtensions {
                code: self.code().to_string(),
            },
        }
    }
}

impl Operation {
    /// Builds an [`Operation`] from a GraphQL query document.
    ///
    /// `variables` supplies values for the operation's declared variables
    /// (as decoded from the request's JSON `variables` payload). Variables
    /// that are neither supplied nor defaulted leave their argument absent.
    pub fn from_document(
        document: &str,
        variables: &serde_json::Map<String, serde_json::Value>,
        operation_name: Option<&str>,
    ) -> Result<Self> {
        let ast_doc =
            ast::query::parse(document)
                .map_err(|err| DocumentError::ParseError(err.to_string()))?;

        let mut operations = vec![];
        for def in ast_doc.definitions {
            match def {
                ast::query::Definition::Operation(op_def) => operations.push(op_def),
                ast::query::Definition::Fragment(frag_def) =>
                    return Err(DocumentError::Unsupported(format!(
                        "fragment definition `{}`",
                        frag_def.name,
                    ))),
            }
        }

        let op_def =
            if let Some(operation_name) = operation_name {
                operations.into_iter()
                    .find(|op_def| operation_def_name(op_def) == Some(operation_name))
                    .ok_or_else(|| DocumentError::OperationNotFound {
                        operation_name: operation_name.to_string(),
                    })?
            } else {
                match operations.len() {
                    0 => return Err(DocumentError::NoOperations),
                    1 => operations.remove(0),
                    num_operations =>
                        return Err(DocumentError::MultipleOperations { num_operations }),
                }
            };

        let (kind, variable_defs, selection_set) =
            match op_def {
                ast::query::OperationDefinition::SelectionSet(selection_set) =>
                    (OperationKind::Query, vec![], selection_set),
                ast::query::OperationDefinition::Query(query) =>
                    (OperationKind::Query, query.variable_definitions, query.selection_set),
                ast::query::OperationDefinition::Mutation(mutation) =>
                    (OperationKind::Mutation, mutation.variable_definitions, mutation.selection_set),
                ast::query::OperationDefinition::Subscription(_) =>
                    return Err(DocumentError::Unsupported(
                        "subscription operations".to_string(),
                    )),
            };

        let variable_definitions = variable_definitions(&variable_defs)?;
        let variable_values = resolve_variables(&variable_defs, variables)?;

        let num_fields = selection_set.items.len();
        let mut root_fields = field_selections(selection_set, &variable_values)?;
        if root_fields.len() != 1 {
            return Err(DocumentError::MultipleRootFields { num_fields });
        }

        Ok(Self {
            kind,
            root_field: root_fields.remove(0),
            variable_definitions,
        })
    }
}

fn operation_def_name(op_def: &ast::query::OperationDefinition) -> Option<&str> {
    match op_def {
        ast::query::OperationDefinition::SelectionSet(_) => None,
        ast::query::OperationDefinition::Query(query) => query.name.as_deref(),
        ast::query::OperationDefinition::Mutation(mutation) => mutation.name.as_deref(),
        ast::query::OperationDefinition::Subscription(sub) => sub.name.as_deref(),
    }
}

fn variable_definitions(
    variable_defs: &[ast::query::VariableDefinition],
) -> Result<Vec<VariableDefinition>> {
    let mut definitions: Vec<VariableDefinition> = Vec::with_capacity(variable_defs.len());
    for var_def in variable_defs {
        if definitions.iter().any(|def| def.name == var_def.name) {
            return Err(DocumentError::DuplicateVariable {
                variable_name: var_def.name.to_string(),
            });
        }

        let def_location: loc::SchemaDefLocation =
            loc::FilePosition::from_pos(None::<&Path>, var_def.position).into();
        definitions.push(VariableDefinition {
            has_default: var_def.default_value.is_some(),
            name: var_def.name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(&def_location, &var_def.var_type),
        });
    }
    Ok(definitions)
}

/// Maps each declared variable to the value it takes for this request, or
/// `None` when it is neither supplied nor defaulted.
fn resolve_variables(
    variable_defs: &[ast::query::VariableDefinition],
    variables: &serde_json::Map<String, serde_json::Value>,
) -> Result<HashMap<String, Option<RawArgument>>> {
    let mut values = HashMap::new();
    for var_def in variable_defs {
        let value =
            if let Some(json_value) = variables.get(var_def.name.as_str()) {
                Some(RawArgument::Variable(json_value.to_owned()))
            } else if let Some(default_value) = &var_def.default_value {
                Some(RawArgument::Literal(
                    Literal::try_from_ast(default_value)
                        .map_err(|err| literal_error(&var_def.name, err))?
                ))
            } else {
                None
            };
        values.insert(var_def.name.to_string(), value);
    }
    Ok(values)
}

fn field_selections(
    selection_set: ast::query::SelectionSet,
    variable_values: &HashMap<String, Option<RawArgument>>,
) -> Result<Vec<FieldSelection>> {
    selection_set.items
        .into_iter()
        .map(|selection| match selection {
            ast::query::Selection::Field(field) =>
                field_selection(field, variable_values),
            ast::query::Selection::FragmentSpread(spread) =>
                Err(DocumentError::Unsupported(format!(
                    "fragment spread `...{}`",
                    spread.fragment_name,
                ))),
            ast::query::Selection::InlineFragment(_) =>
                Err(DocumentError::Unsupported("inline fragments".to_string())),
        })
        .collect()
}

fn field_selection(
    field: ast::query::Field,
    variable_values: &HashMap<String, Option<RawArgument>>,
) -> Result<FieldSelection> {
    if let Some(directive) = field.directives.first() {
        return Err(DocumentError::Unsupported(format!(
            "the `@{}` directive on the `{}` field",
            directive.name,
            field.name,
        )));
    }

    let mut arguments = IndexMap::new();
    let mut variable_usages = IndexMap::new();
    let mut seen_arguments = HashSet::new();
    for (argument_name, ast_value) in &field.arguments {
        if !seen_arguments.insert(argument_name.as_str()) {
            return Err(DocumentError::DuplicateArgument {
                argument_name: argument_name.to_string(),
                field_name: field.name.to_string(),
            });
        }

        let value =
            if let ast::query::Value::Variable(variable_name) = ast_value {
                variable_usages.insert(argument_name.to_string(), variable_name.to_string());
                match variable_values.get(variable_name.as_str()) {
                    Some(Some(value)) => value.to_owned(),
                    Some(None) => continue,
                    None => return Err(DocumentError::UndefinedVariable {
                        variable_name: variable_name.to_string(),
                    }),
                }
            } else {
                RawArgument::Literal(
                    Literal::try_from_ast(ast_value)
                        .map_err(|err| literal_error(argument_name, err))?
                )
            };
        arguments.insert(argument_name.to_string(), value);
    }

    let selection_set =
        if field.selection_set.items.is_empty() {
            None
        } else {
            Some(field_selections(field.selection_set, variable_values)?)
        };

    Ok(FieldSelection {
        alias: field.alias,
        arguments,
        name: field.name,
        selection_set,
        variable_usages,
    })
}

fn literal_error(argument_name: &str, err: LiteralFromAstError) -> DocumentError {
    match err {
        LiteralFromAstError::IntOutOfRange(number) => DocumentError::InvalidLiteral {
            argument_name: argument_name.to_string(),
            reason: format!("{number} is out of range"),
        },
        LiteralFromAstError::VariableRef(variable_name) =>
            DocumentError::NestedVariableReference {
                argument_name: argument_name.to_string(),
                variable_name,
            },
    }
}

