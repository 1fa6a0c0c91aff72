pub mod ast;
pub mod execution;
pub mod literal;
pub mod loc;
pub mod operation;
pub mod resolver;
pub mod scalar;
pub mod schema;
pub mod types;
pub mod users;
mod value;

pub use execution::execute;
pub use execution::ExecutionResult;
pub use operation::Operation;
pub use schema::Schema;
pub use schema::SchemaBuilder;
pub use schema::SchemaBuildError;
pub use value::Value;
