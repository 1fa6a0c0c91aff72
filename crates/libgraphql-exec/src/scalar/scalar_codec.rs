use crate::literal::Literal;
use crate::Value;
use thiserror::Error;

/// The conversion contract for one scalar type.
///
/// Codecs are registered with a
/// [`SchemaBuilder`](crate::schema::SchemaBuilder) at schema-build time and
/// shared (read-only) by every request executed against the resulting
/// [`Schema`](crate::schema::Schema).
pub trait ScalarCodec: Send + Sync {
    /// The name of the scalar type as declared in the schema (e.g. `Date`).
    fn name(&self) -> &str;

    /// Encodes a value produced by a resolver into its wire representation.
    ///
    /// Must accept every value a resolver can legitimately produce for this
    /// scalar. A value of the wrong shape indicates a resolver bug and is
    /// reported as a [`SerializationError`].
    fn serialize(
        &self,
        value: &Value,
    ) -> Result<serde_json::Value, SerializationError>;

    /// Decodes a value supplied at call time (e.g. through a variable) into
    /// the internal representation. Semantically invalid input yields a
    /// [`ScalarParseError`].
    fn parse_value(
        &self,
        wire_value: &serde_json::Value,
    ) -> Result<Value, ScalarParseError>;

    /// Decodes a literal written inline in the query document.
    ///
    /// Literal kinds the scalar does not accept produce
    /// [`ParsedLiteral::Unrepresentable`]. Errors are reserved for malformed
    /// values of a supported kind.
    fn parse_literal(
        &self,
        literal: &Literal,
    ) -> Result<ParsedLiteral, ScalarParseError>;
}
impl std::fmt::Debug for dyn ScalarCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarCodec")
            .field("name", &self.name())
            .finish()
    }
}

/// Result of [`ScalarCodec::parse_literal`].
#[derive(Clone, Debug, PartialEq)]
pub enum ParsedLiteral {
    Value(Value),

    /// The literal's kind cannot satisfy this scalar.
    Unrepresentable,
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("Invalid `{scalar_name}` value: {message}")]
pub struct ScalarParseError {
    pub scalar_name: String,
    pub message: String,
}
impl ScalarParseError {
    pub fn new(scalar_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            scalar_name: scalar_name.into(),
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("`{scalar_name}` cannot represent {message}")]
pub struct SerializationError {
    pub scalar_name: String,
    pub message: String,
}
impl SerializationError {
    pub fn new(scalar_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            scalar_name: scalar_name.into(),
            message: message.into(),
        }
    }
}
