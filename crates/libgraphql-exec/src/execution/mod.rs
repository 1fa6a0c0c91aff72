//! Running an [`Operation`](crate::Operation) against a
//! [`Schema`](crate::Schema).
//!
//! [`execute()`] is the single entry point transports call. Per-field work
//! (argument decoding, resolver invocation, scalar encoding) is done by the
//! [`Dispatcher`], which can also be driven directly.

mod dispatcher;
mod execute;
mod execution_error;
mod execution_result;
mod operation_validator;

pub use dispatcher::Dispatcher;
pub use dispatcher::FieldOutput;
pub use execute::execute;
pub use execution_error::ExecutionError;
pub use execution_result::ErrorExtensions;
pub use execution_result::ExecutionResult;
pub use execution_result::GraphQLError;
pub use execution_result::PathSegment;

#[cfg(test)]
mod tests;
