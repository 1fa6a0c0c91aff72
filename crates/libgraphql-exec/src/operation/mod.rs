mod document;
mod field_selection;
#[allow(clippy::module_inception)]
mod operation;
mod operation_kind;
mod raw_argument;
mod variable_definition;

pub use document::DocumentError;
pub use field_selection::FieldSelection;
pub use operation::Operation;
pub use operation_kind::OperationKind;
pub use raw_argument::RawArgument;
pub use variable_definition::VariableDefinition;
