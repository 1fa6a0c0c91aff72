use thiserror::Error;

/// A failure raised by a resolver while producing a field's value.
///
/// Resolver failures are attributed to the field that raised them and
/// reported in the response's error list; they never abort sibling fields.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct ResolverError {
    message: String,
}
impl ResolverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Wraps any other error, keeping only its rendered message.
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        Self::new(err.to_string())
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}
