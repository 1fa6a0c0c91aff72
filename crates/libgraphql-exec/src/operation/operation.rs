use crate::operation::FieldSelection;
use crate::operation::OperationKind;
use crate::operation::RawArgument;
use crate::operation::VariableDefinition;
use indexmap::IndexMap;

/// A parsed request: which root field to run, with which arguments.
///
/// Each operation targets exactly one root field. An [`Operation`] is built
/// per incoming request (directly by transport code, or from a query
/// document via [`Operation::from_document()`]) and consumed by
/// [`execute()`](crate::execution::execute).
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub(crate) kind: OperationKind,
    pub(crate) root_field: FieldSelection,
    pub(crate) variable_definitions: Vec<VariableDefinition>,
}
impl Operation {
    pub fn new(kind: OperationKind, field_name: impl Into<String>) -> Self {
        Self {
            kind,
            root_field: FieldSelection::new(field_name),
            variable_definitions: vec![],
        }
    }

    pub fn mutation(field_name: impl Into<String>) -> Self {
        Self::new(OperationKind::Mutation, field_name)
    }

    pub fn query(field_name: impl Into<String>) -> Self {
        Self::new(OperationKind::Query, field_name)
    }

    pub fn arguments(&self) -> &IndexMap<String, RawArgument> {
        self.root_field.arguments()
    }

    pub fn field_name(&self) -> &str {
        self.root_field.name()
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn root_field(&self) -> &FieldSelection {
        &self.root_field
    }

    /// The variables declared by the query document this operation was
    /// built from (empty for operations built directly).
    pub fn variable_definitions(&self) -> &[VariableDefinition] {
        self.variable_definitions.as_slice()
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.root_field = self.root_field.with_alias(alias);
        self
    }

    pub fn with_argument(
        mut self,
        name: impl Into<String>,
        value: impl Into<RawArgument>,
    ) -> Self {
        self.root_field = self.root_field.with_argument(name, value);
        self
    }

    pub fn with_selection_set(mut self, selection_set: Vec<FieldSelection>) -> Self {
        self.root_field = self.root_field.with_selection_set(selection_set);
        self
    }
}
