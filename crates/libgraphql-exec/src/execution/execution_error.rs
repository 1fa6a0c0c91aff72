use crate::execution::ErrorExtensions;
use crate::execution::GraphQLError;
use crate::execution::PathSegment;
use crate::literal::LiteralKind;
use crate::operation::OperationKind;
use crate::resolver::ResolverError;
use crate::scalar::SerializationError;
use crate::schema::UnknownFieldError;
use thiserror::Error;

/// A failure while executing a single field of an operation.
///
/// Execution errors never escape [`execute()`](crate::execution::execute):
/// each is converted into a [`GraphQLError`] attributed to the path of the
/// field that raised it.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExecutionError {
    #[error(
        "Invalid value for the `{argument_name}` argument of \
        `{type_name}.{field_name}`: {reason}"
    )]
    InvalidArgumentValue {
        argument_name: String,
        field_name: String,
        reason: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}.{field_name}` field is of type `{result_type}`, which \
        has no subfields to select"
    )]
    InvalidSelection {
        field_name: String,
        result_type: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}.{field_name}` field requires the `{argument_name}` \
        argument of type `{argument_type}`, but it was not provided"
    )]
    MissingArgument {
        argument_name: String,
        argument_type: String,
        field_name: String,
        type_name: String,
    },

    #[error(
        "The `${variable_name}` variable cannot be of type `{type_name}`, \
        which is not an input type"
    )]
    NonInputVariableType {
        type_name: String,
        variable_name: String,
    },

    #[error("Cannot return null for non-nullable field `{type_name}.{field_name}`")]
    NonNullViolation {
        field_name: String,
        type_name: String,
    },

    #[error("{0}")]
    Resolver(#[from] ResolverError),

    #[error(transparent)]
    Serialization(#[from] SerializationError),

    #[error(
        "Expected {expected} for the `{type_name}.{field_name}` field, but \
        got a {actual} value"
    )]
    UnexpectedValue {
        actual: &'static str,
        expected: String,
        field_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}.{field_name}` field does not accept an argument named \
        `{argument_name}`"
    )]
    UnknownArgument {
        argument_name: String,
        field_name: String,
        type_name: String,
    },

    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),

    #[error("Unknown type `{type_name}` for the `${variable_name}` variable")]
    UnknownVariableType {
        type_name: String,
        variable_name: String,
    },

    #[error(
        "A {literal_kind} literal cannot be used for the `{argument_name}` \
        argument of type `{argument_type}`"
    )]
    UnrepresentableLiteral {
        argument_name: String,
        argument_type: String,
        literal_kind: LiteralKind,
    },

    #[error("The schema does not support {operation} operations")]
    UnsupportedOperationType {
        operation: OperationKind,
    },

    #[error(
        "The `${variable_name}` variable of type `{variable_type}` cannot be \
        used for the `{argument_name}` argument of `{type_name}.{field_name}`, \
        which expects `{argument_type}`"
    )]
    VariableTypeMismatch {
        argument_name: String,
        argument_type: String,
        field_name: String,
        type_name: String,
        variable_name: String,
        variable_type: String,
    },
}
impl ExecutionError {
    /// The stable machine-readable code reported under `extensions.code`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgumentValue { .. } => "BAD_USER_INPUT",

            Self::InvalidSelection { .. }
            | Self::MissingArgument { .. }
            | Self::NonInputVariableType { .. }
            | Self::UnknownArgument { .. }
            | Self::UnknownField(_)
            | Self::UnknownVariableType { .. }
            | Self::UnrepresentableLiteral { .. }
            | Self::UnsupportedOperationType { .. }
            | Self::VariableTypeMismatch { .. } => "GRAPHQL_VALIDATION_FAILED",

            Self::Resolver(_) => "RESOLVER_ERROR",

            Self::NonNullViolation { .. }
            | Self::Serialization(_)
            | Self::UnexpectedValue { .. } => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn to_graphql_error(&self, path: Vec<PathSegment>) -> GraphQLError {
        GraphQLError {
            message: self.to_string(),
            path,
            extensions: ErrorExtensions {
                code: self.code().to_string(),
            },
        }
    }
}
