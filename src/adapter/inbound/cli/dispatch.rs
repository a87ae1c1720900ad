//! Command dispatch.

use super::command::{Cli, Commands, ConfigCommand};
use super::{check, keygen, serve};

/// Run a parsed command line.
pub async fn execute(cli: Cli) -> miette::Result<()> {
    match cli.command {
        Commands::Serve(args) => serve::execute(&args).await,
        Commands::Keygen => {
            keygen::execute();
            Ok(())
        }
        Commands::Config(ConfigCommand::Check(arg)) => check::execute(arg.config.as_deref()),
    }
}
