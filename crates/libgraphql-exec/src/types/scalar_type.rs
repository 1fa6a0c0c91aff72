use crate::loc;

/// Represents a custom
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars) declared
/// within some [`Schema`](crate::schema::Schema).
///
/// The conversion rules for the scalar live in the
/// [`ScalarCodec`](crate::scalar::ScalarCodec) registered under the same
/// name.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}

impl ScalarType {
    /// The [loc::SchemaDefLocation] indicating where this [ScalarType] was
    /// defined within the schema.
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
