use crate::resolver::Arguments;
use crate::resolver::RequestContext;
use crate::resolver::ResolverError;
use crate::Value;
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;

pub type ResolverResult = Result<Value, ResolverError>;

/// Produces the value of a single field.
///
/// `parent` is the value the enclosing object resolved to ([`Value::Null`]
/// for root Query/Mutation fields), and `args` holds the field's arguments
/// after scalar decoding. Resolvers may suspend (e.g. to call a data store);
/// the executor awaits them before encoding the result.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(
        &self,
        parent: &Value,
        args: &Arguments,
        ctx: &RequestContext,
    ) -> ResolverResult;
}

/// Adapts a closure returning a future into a [`Resolver`].
///
/// The closure receives owned copies of the parent value, arguments and
/// context so the returned future need not borrow from the executor.
pub struct FnResolver<F>(F);

#[async_trait]
impl<F, Fut> Resolver for FnResolver<F>
where
    F: Fn(Value, Arguments, RequestContext) -> Fut + Send + Sync,
    Fut: Future<Output = ResolverResult> + Send,
{
    async fn resolve(
        &self,
        parent: &Value,
        args: &Arguments,
        ctx: &RequestContext,
    ) -> ResolverResult {
        (self.0)(parent.to_owned(), args.to_owned(), ctx.to_owned()).await
    }
}

pub fn resolver_fn<F, Fut>(func: F) -> Arc<dyn Resolver>
where
    F: Fn(Value, Arguments, RequestContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ResolverResult> + Send + 'static,
{
    Arc::new(FnResolver(func))
}
