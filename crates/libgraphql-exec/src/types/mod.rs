mod field;
mod graphql_type;
mod graphql_type_kind;
mod list_type_annotation;
mod named_type_annotation;
mod object_type;
mod object_type_builder;
mod object_type_validator;
mod parameter;
mod scalar_type;
mod type_annotation;
mod types_map_builder;

pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
pub use object_type::ObjectType;
pub(crate) use object_type_builder::ObjectTypeBuilder;
use object_type_validator::ObjectTypeValidator;
pub use parameter::Parameter;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub(crate) use types_map_builder::TypesMapBuilder;

#[cfg(test)]
mod tests;
