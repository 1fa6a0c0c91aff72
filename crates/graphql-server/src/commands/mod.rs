mod execute;
mod schema;

use crate::Cli;
use crate::CommandResult;
use execute::ExecuteCmd;
use schema::SchemaCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-server")]
pub(crate) enum CommandEnum {
    /// Execute a single query or mutation against the users schema and print
    /// the JSON response.
    Execute(Box<ExecuteCmd>),

    /// Print the SDL of the users schema.
    Schema(SchemaCmd),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Execute(cmd) => cmd.run(cli).await,
            Self::Schema(cmd) => cmd.run(cli).await,
        }
    }
}
