use crate::loc;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "Parameters can only be declared with input-compatible types: The \
        `{type_name}.{field_name}` field declares the `{parameter_name}` \
        parameter with the `{outputonly_type_name}` type, which is an object \
        type."
    )]
    InvalidParameterWithOutputOnlyType {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        outputonly_type_name: String,
        parameter_name: String,
        type_name: String,
    },

    #[error("There is no type defined with the name `{undefined_type_name}`")]
    UndefinedTypeName {
        ref_location: loc::SchemaDefLocation,
        undefined_type_name: String,
    },
}
