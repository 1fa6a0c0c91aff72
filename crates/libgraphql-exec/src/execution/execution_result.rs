use serde::Serialize;

/// The response payload for one executed operation.
///
/// Serializes to `{"data": ...}` on success, `{"errors": [...]}` when the
/// root field failed, or both when only nested fields failed.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ExecutionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLError>,
}
impl ExecutionResult {
    pub fn from_errors(errors: Vec<GraphQLError>) -> Self {
        Self {
            data: None,
            errors,
        }
    }

    /// Indicates whether the operation completed without recording any
    /// error.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// One entry of a response's `errors` list.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphQLError {
    pub message: String,

    /// Response keys (and list indices) leading to the field that failed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<PathSegment>,

    pub extensions: ErrorExtensions,
}
impl GraphQLError {
    pub fn code(&self) -> &str {
        self.extensions.code.as_str()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ErrorExtensions {
    pub code: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}
impl std::convert::From<&str> for PathSegment {
    fn from(value: &str) -> Self {
        Self::Field(value.to_string())
    }
}
impl std::convert::From<usize> for PathSegment {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}
