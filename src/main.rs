use clap::Parser;
use notez::adapter::inbound::cli::command::Cli;

#[tokio::main]
async fn main() -> miette::Result<()> {
    let _ = dotenvy::dotenv();
    notez::adapter::inbound::cli::dispatch::execute(Cli::parse()).await
}
