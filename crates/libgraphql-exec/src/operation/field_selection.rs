use crate::operation::RawArgument;
use indexmap::IndexMap;

/// A field selected beneath the root field of an [`Operation`](crate::operation::Operation),
/// e.g. `name` in `{ user(id: 1, name: "Ada") { name } }`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: IndexMap<String, RawArgument>,
    pub(crate) name: String,
    pub(crate) selection_set: Option<Vec<FieldSelection>>,
    pub(crate) variable_usages: IndexMap<String, String>,
}
impl FieldSelection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            arguments: IndexMap::new(),
            name: name.into(),
            selection_set: None,
            variable_usages: IndexMap::new(),
        }
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &IndexMap<String, RawArgument> {
        &self.arguments
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The key this field's value is written under in the response.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }

    pub fn selection_set(&self) -> Option<&[FieldSelection]> {
        self.selection_set.as_deref()
    }

    /// Arguments written as a variable reference (e.g. `id: $id`), mapped to
    /// the referenced variable's name. Includes references to variables that
    /// were not supplied and so left the argument absent.
    pub fn variable_usages(&self) -> &IndexMap<String, String> {
        &self.variable_usages
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_argument(
        mut self,
        name: impl Into<String>,
        value: impl Into<RawArgument>,
    ) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    pub fn with_selection_set(mut self, selection_set: Vec<FieldSelection>) -> Self {
        self.selection_set = Some(selection_set);
        self
    }
}
