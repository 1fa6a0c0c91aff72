use crate::execution::ExecutionError;
use crate::operation::FieldSelection;
use crate::operation::Operation;
use crate::operation::VariableDefinition;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;

/// Checks an [`Operation`]'s declared variables against a [`Schema`] before
/// anything is executed: every variable's type must name a declared input
/// type, and every argument a variable is passed to must accept that type.
pub(super) struct OperationValidator<'a> {
    errors: Vec<ExecutionError>,
    operation: &'a Operation,
    schema: &'a Schema,
}
impl<'a> OperationValidator<'a> {
    pub fn new(schema: &'a Schema, operation: &'a Operation) -> Self {
        Self {
            errors: vec![],
            operation,
            schema,
        }
    }

    pub fn validate(mut self, root_type_name: &str) -> Vec<ExecutionError> {
        let operation = self.operation;
        let mut known_variables = vec![];
        for var_def in operation.variable_definitions() {
            let type_name = var_def.type_annotation().innermost_type_name();
            match self.schema.lookup_type(type_name) {
                None => self.errors.push(ExecutionError::UnknownVariableType {
                    type_name: type_name.to_string(),
                    variable_name: var_def.name().to_string(),
                }),

                Some(GraphQLType::Object(_)) =>
                    self.errors.push(ExecutionError::NonInputVariableType {
                        type_name: type_name.to_string(),
                        variable_name: var_def.name().to_string(),
                    }),

                Some(_) => known_variables.push(var_def),
            }
        }

        self.validate_selection(root_type_name, operation.root_field(), &known_variables);
        self.errors
    }

    fn validate_selection(
        &mut self,
        type_name: &str,
        selection: &FieldSelection,
        known_variables: &[&VariableDefinition],
    ) {
        // Unknown fields and arguments are reported when the field executes.
        let schema = self.schema;
        let Ok(lookup) = schema.lookup_field(type_name, selection.name()) else {
            return;
        };

        for (argument_name, variable_name) in selection.variable_usages() {
            let Some(param) = lookup.field.parameters().get(argument_name) else {
                continue;
            };
            let Some(var_def) =
                known_variables.iter().find(|var_def| var_def.name() == variable_name.as_str())
            else {
                continue;
            };

            let has_default = var_def.has_default() || param.default_value().is_some();
            if !variable_fits(var_def.type_annotation(), param.type_annotation(), has_default) {
                self.errors.push(ExecutionError::VariableTypeMismatch {
                    argument_name: argument_name.to_string(),
                    argument_type: param.type_annotation().to_string(),
                    field_name: lookup.field.name().to_string(),
                    type_name: type_name.to_string(),
                    variable_name: variable_name.to_string(),
                    variable_type: var_def.type_annotation().to_string(),
                });
            }
        }

        let result_type_name = lookup.result_type().innermost_type_name();
        for sub_selection in selection.selection_set().unwrap_or_default() {
            self.validate_selection(result_type_name, sub_selection, known_variables);
        }
    }
}

/// A nullable variable may only fill a non-null position when a default
/// (on the variable or on the argument) stands in for a missing value.
fn variable_fits(
    variable_type: &TypeAnnotation,
    argument_type: &TypeAnnotation,
    has_default: bool,
) -> bool {
    if variable_type.nullable() && !argument_type.nullable() && !has_default {
        return false;
    }
    same_shape(variable_type, argument_type)
}

fn type_fits(variable_type: &TypeAnnotation, argument_type: &TypeAnnotation) -> bool {
    (argument_type.nullable() || !variable_type.nullable())
        && same_shape(variable_type, argument_type)
}

/// Compares two annotations ignoring their outermost nullability.
fn same_shape(variable_type: &TypeAnnotation, argument_type: &TypeAnnotation) -> bool {
    match (variable_type, argument_type) {
        (TypeAnnotation::List(var_list), TypeAnnotation::List(arg_list)) =>
            type_fits(var_list.inner_type(), arg_list.inner_type()),

        (TypeAnnotation::Named(var_named), TypeAnnotation::Named(arg_named)) =>
            var_named.type_name() == arg_named.type_name(),

        _ => false,
    }
}
