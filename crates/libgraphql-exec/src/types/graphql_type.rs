use crate::loc;
use crate::types::ObjectType;
use crate::types::ScalarType;

/// Represents a named type defined within a [`Schema`](crate::schema::Schema).
///
/// The five scalar types GraphQL defines implicitly get their own variants;
/// custom scalars declared in the SDL (e.g. `scalar Date`) are represented by
/// [`GraphQLType::Scalar`].
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Float,
    ID,
    Int,
    Object(ObjectType),
    Scalar(ScalarType),
    String,
}
impl GraphQLType {
    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(obj_type) = self {
            Some(obj_type)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(scalar_type) = self {
            Some(scalar_type)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> loc::SchemaDefLocation {
        match self {
            Self::Bool
            | Self::Float
            | Self::ID
            | Self::Int
            | Self::String
                => loc::SchemaDefLocation::GraphQLBuiltIn,
            Self::Object(obj_type) => obj_type.def_location().to_owned(),
            Self::Scalar(scalar_type) => scalar_type.def_location().to_owned(),
        }
    }

    /// Indicates whether values of this type are leaves in a response
    /// (i.e. encoded through a
    /// [`ScalarCodec`](crate::scalar::ScalarCodec)).
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Self::Object(_))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::Object(obj_type) => obj_type.name(),
            Self::Scalar(scalar_type) => scalar_type.name(),
            Self::String => "String",
        }
    }
}
