use crate::operation::OperationKind;
use std::any::Any;
use std::sync::Arc;

/// Per-request state handed to every resolver invoked for one operation.
///
/// Integrators can attach arbitrary shared data (e.g. a database handle or
/// the authenticated caller) with [`RequestContext::with_data()`].
#[derive(Clone, Default)]
pub struct RequestContext {
    data: Option<Arc<dyn Any + Send + Sync>>,
    operation_kind: Option<OperationKind>,
}
impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data<T: Any + Send + Sync>(data: T) -> Self {
        Self {
            data: Some(Arc::new(data)),
            operation_kind: None,
        }
    }

    pub fn data<T: Any>(&self) -> Option<&T> {
        self.data.as_deref()?.downcast_ref::<T>()
    }

    /// The kind of operation currently executing. Set by the executor.
    pub fn operation_kind(&self) -> Option<OperationKind> {
        self.operation_kind
    }

    pub(crate) fn for_operation(&self, kind: OperationKind) -> Self {
        Self {
            data: self.data.clone(),
            operation_kind: Some(kind),
        }
    }
}
impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("has_data", &self.data.is_some())
            .field("operation_kind", &self.operation_kind)
            .finish()
    }
}
