use crate::resolver::Resolver;
use std::collections::HashMap;
use std::sync::Arc;

/// Maps `(type name, field name)` pairs to the [`Resolver`] for that field.
///
/// Every root (Query/Mutation) field needs an entry. Fields of other object
/// types may omit one, in which case the executor reads the same-named
/// property off of the parent value.
#[derive(Clone, Default)]
pub struct ResolverMap {
    resolvers: HashMap<String, HashMap<String, Arc<dyn Resolver>>>,
}
impl ResolverMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(
        &self,
        type_name: &str,
        field_name: &str,
    ) -> Option<&Arc<dyn Resolver>> {
        self.resolvers.get(type_name)?.get(field_name)
    }

    /// Registers `resolver` for `type_name.field_name`, returning the
    /// previously-registered resolver (if any).
    pub fn insert(
        &mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        resolver: Arc<dyn Resolver>,
    ) -> Option<Arc<dyn Resolver>> {
        self.resolvers
            .entry(type_name.into())
            .or_default()
            .insert(field_name.into(), resolver)
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.values().all(HashMap::is_empty)
    }

    /// Iterates all registered `(type name, field name)` pairs.
    pub fn keys(&self) -> impl Iterator<Item = (&str, &str)> {
        self.resolvers.iter().flat_map(|(type_name, fields)| {
            fields.keys().map(move |field_name| (type_name.as_str(), field_name.as_str()))
        })
    }

    pub fn len(&self) -> usize {
        self.resolvers.values().map(HashMap::len).sum()
    }

    /// Builder-style variant of [`ResolverMap::insert()`].
    pub fn with(
        mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        resolver: Arc<dyn Resolver>,
    ) -> Self {
        self.insert(type_name, field_name, resolver);
        self
    }
}
impl std::fmt::Debug for ResolverMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys =
            self.keys()
                .map(|(type_name, field_name)| format!("{type_name}.{field_name}"))
                .collect::<Vec<_>>();
        keys.sort();
        f.debug_struct("ResolverMap")
            .field("fields", &keys)
            .finish()
    }
}
