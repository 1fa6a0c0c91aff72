//! Conversion rules for leaf (scalar) types.
//!
//! Each scalar type known to a [`Schema`](crate::schema::Schema) is backed by
//! a [`ScalarCodec`] that converts between three representations: the wire
//! (JSON) form, the internal [`Value`](crate::Value) form handed to
//! resolvers, and the inline [`Literal`](crate::literal::Literal) form
//! written directly in a query document.

mod builtin_scalars;
mod date_scalar;
mod scalar_codec;

pub use builtin_scalars::BooleanScalar;
pub use builtin_scalars::FloatScalar;
pub use builtin_scalars::IdScalar;
pub use builtin_scalars::IntScalar;
pub use builtin_scalars::StringScalar;
pub(crate) use builtin_scalars::builtin_codecs;
pub use date_scalar::DateScalar;
pub use scalar_codec::ParsedLiteral;
pub use scalar_codec::ScalarCodec;
pub use scalar_codec::ScalarParseError;
pub use scalar_codec::SerializationError;

#[cfg(test)]
mod tests;
