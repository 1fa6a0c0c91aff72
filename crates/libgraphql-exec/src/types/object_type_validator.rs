use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use std::collections::HashMap;

/// Checks that every type an [`ObjectType`] refers to (through its fields'
/// types and their parameters' types) is declared, and that parameters only
/// use input-compatible (scalar) types.
pub(super) struct ObjectTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a ObjectType,
    types_map: &'a HashMap<String, GraphQLType>,
}
impl<'a> ObjectTypeValidator<'a> {
    pub fn new(
        type_: &'a ObjectType,
        types_map: &'a HashMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        for field in self.type_.fields().values() {
            let field_type_name = field.type_annotation().innermost_type_name();
            if !self.types_map.contains_key(field_type_name) {
                self.errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location: field.def_location().to_owned(),
                    undefined_type_name: field_type_name.to_string(),
                });
            }

            for param in field.parameters().values() {
                let param_type_name = param.type_annotation().innermost_type_name();
                match self.types_map.get(param_type_name) {
                    None => self.errors.push(TypeValidationError::UndefinedTypeName {
                        ref_location: param.def_location().to_owned(),
                        undefined_type_name: param_type_name.to_string(),
                    }),

                    Some(GraphQLType::Object(_)) =>
                        self.errors.push(
                            TypeValidationError::InvalidParameterWithOutputOnlyType {
                                def_location: param.def_location().to_owned(),
                                field_name: field.name().to_string(),
                                outputonly_type_name: param_type_name.to_string(),
                                parameter_name: param.name().to_string(),
                                type_name: self.type_.name().to_string(),
                            }
                        ),

                    Some(_) => (),
                }
            }
        }

        self.errors
    }
}
