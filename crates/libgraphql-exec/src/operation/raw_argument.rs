use crate::literal::Literal;

/// An argument value as delivered by the transport, before any scalar
/// decoding.
///
/// The distinction matters for custom scalars: inline literals are decoded
/// with [`ScalarCodec::parse_literal()`](crate::scalar::ScalarCodec::parse_literal)
/// while variable-supplied values go through
/// [`ScalarCodec::parse_value()`](crate::scalar::ScalarCodec::parse_value).
#[derive(Clone, Debug, PartialEq)]
pub enum RawArgument {
    Literal(Literal),
    Variable(serde_json::Value),
}
impl std::convert::From<Literal> for RawArgument {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}
impl std::convert::From<serde_json::Value> for RawArgument {
    fn from(value: serde_json::Value) -> Self {
        Self::Variable(value)
    }
}
