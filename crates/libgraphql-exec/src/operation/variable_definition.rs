use crate::types::TypeAnnotation;

/// A variable declared by a query document, e.g. `$id: Int!` in
/// `query ($id: Int!) { users(id: $id) }`.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub(crate) has_default: bool,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl VariableDefinition {
    pub fn has_default(&self) -> bool {
        self.has_default
    }

    /// The variable's name, without the leading `$`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
