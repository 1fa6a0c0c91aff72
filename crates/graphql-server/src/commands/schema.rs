use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_exec::users::USER_SCHEMA_SDL;

#[derive(Debug, clap::Args)]
pub(crate) struct SchemaCmd {}

#[inherent::inherent]
impl RunnableCommand for SchemaCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        CommandResult::stdout(format_args!("{}", USER_SCHEMA_SDL.trim_end()))
    }
}
