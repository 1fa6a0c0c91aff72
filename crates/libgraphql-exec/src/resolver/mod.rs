//! Resolvers: the functions responsible for producing the value of one
//! schema field.

mod arguments;
mod request_context;
#[allow(clippy::module_inception)]
mod resolver;
mod resolver_error;
mod resolver_map;

pub use arguments::Arguments;
pub use request_context::RequestContext;
pub use resolver::FnResolver;
pub use resolver::Resolver;
pub use resolver::ResolverResult;
pub use resolver::resolver_fn;
pub use resolver_error::ResolverError;
pub use resolver_map::ResolverMap;

#[cfg(test)]
mod tests;
