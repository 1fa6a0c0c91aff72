use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_exec::execution::ExecutionResult;
use libgraphql_exec::resolver::RequestContext;
use libgraphql_exec::users;
use libgraphql_exec::Operation;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Debug, clap::Args)]
pub(crate) struct ExecuteCmd {
    #[arg(
        conflicts_with="query_file",
        help="The GraphQL query document to execute.",
        long,
        required_unless_present="query_file",
        short='q',
    )]
    query: Option<String>,

    #[arg(
        help="Path to a file containing the GraphQL query document to execute.",
        long,
    )]
    query_file: Option<PathBuf>,

    #[arg(
        help="A JSON object holding values for the document's variables.",
        long,
    )]
    variables: Option<String>,

    #[arg(
        help="Which operation to run when the document defines several.",
        long,
    )]
    operation_name: Option<String>,

    #[arg(
        help="Pretty-print the JSON response.",
        long,
    )]
    pretty: bool,
}
impl ExecuteCmd {
    fn load_document(&self) -> Result<String, String> {
        match (&self.query, &self.query_file) {
            (Some(query), _) => Ok(query.to_owned()),
            (None, Some(path)) => {
                log::debug!("Reading query document from {path:#?}.");
                std::fs::read_to_string(path).map_err(|err| format!(
                    "Unable to read the query file at {path:#?}: {err}",
                ))
            },
            (None, None) => Err("One of `--query` or `--query-file` is required.".to_string()),
        }
    }

    fn parse_variables(&self) -> Result<serde_json::Map<String, serde_json::Value>, String> {
        let Some(variables) = self.variables.as_deref() else {
            return Ok(serde_json::Map::new());
        };

        match serde_json::from_str::<serde_json::Value>(variables) {
            Ok(serde_json::Value::Object(map)) => Ok(map),
            Ok(other) => Err(format!(
                "`--variables` must be a JSON object, but got `{other}`.",
            )),
            Err(err) => Err(format!("`--variables` is not valid JSON: {err}")),
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for ExecuteCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let document = match self.load_document() {
            Ok(document) => document,
            Err(msg) => return CommandResult::stderr(format_args!(
                "{} {msg}",
                output_utils::RED_X,
            )),
        };

        let variables = match self.parse_variables() {
            Ok(variables) => variables,
            Err(msg) => return CommandResult::stderr(format_args!(
                "{} {msg}",
                output_utils::RED_X,
            )),
        };

        let store = Arc::new(users::InMemoryUserStore::seeded());
        let schema = match users::user_schema(store) {
            Ok(schema) => schema,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Errors building the users schema: {err:#?}",
                output_utils::RED_X,
            )),
        };

        let result =
            match Operation::from_document(
                document.as_str(),
                &variables,
                self.operation_name.as_deref(),
            ) {
                Ok(operation) => {
                    log::debug!(
                        "Executing {} `{}`.",
                        operation.kind(),
                        operation.field_name(),
                    );
                    schema.execute(operation, &RequestContext::new()).await
                },
                Err(err) => {
                    log::debug!("Rejected query document: {err}");
                    ExecutionResult::from_errors(vec![err.to_graphql_error()])
                },
            };

        let rendered =
            if self.pretty {
                serde_json::to_string_pretty(&result)
            } else {
                serde_json::to_string(&result)
            };

        match rendered {
            Ok(json) => {
                let exit_code =
                    if result.is_ok() {
                        ExitCode::SUCCESS
                    } else {
                        ExitCode::FAILURE
                    };
                CommandResult::stdout(format_args!("{json}")).with_exit_code(exit_code)
            },
            Err(err) => CommandResult::stderr(format_args!(
                "{} Unable to encode the response: {err}",
                output_utils::RED_X,
            )),
        }
    }
}
