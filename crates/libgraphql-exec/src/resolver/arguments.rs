use crate::resolver::ResolverError;
use crate::Value;
use indexmap::IndexMap;

/// The decoded arguments passed to a [`Resolver`](crate::resolver::Resolver),
/// keyed by argument name in the order the field declares them.
///
/// Arguments the request omitted (and which have no default) are absent;
/// arguments explicitly set to `null` are present as [`Value::Null`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Arguments(IndexMap<String, Value>);
impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(name.into(), value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Reads a required integer argument.
    pub fn i64(&self, name: &str) -> Result<i64, ResolverError> {
        self.get(name)
            .and_then(Value::as_i64)
            .ok_or_else(|| ResolverError::new(format!(
                "expected an integer `{name}` argument",
            )))
    }

    /// Reads a required string argument.
    pub fn str(&self, name: &str) -> Result<&str, ResolverError> {
        self.get(name)
            .and_then(Value::as_str)
            .ok_or_else(|| ResolverError::new(format!(
                "expected a string `{name}` argument",
            )))
    }
}
impl<K: Into<String>> FromIterator<(K, Value)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, value)| (name.into(), value)).collect())
    }
}
