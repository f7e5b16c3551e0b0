use clap::{Args, Parser, Subcommand};
use lead_funnel::error::AppError;

use crate::server;

#[derive(Debug, Parser)]
#[command(
    name = "Lead Funnel",
    about = "Run the seller lead intake service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the HTTP server (the default when no command is given)
    Serve(ServeArgs),
    /// Print the current weekly mortgage rates and exit
    Rates,
}

#[derive(Debug, Default, Args)]
pub(crate) struct ServeArgs {
    /// Host to bind instead of the configured one
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Port to bind instead of the configured one
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Rates => server::print_rates().await,
    }
}
