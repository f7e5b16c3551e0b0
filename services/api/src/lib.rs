//! HTTP front end for the lead funnel workflows.

mod cli;
mod infra;
mod routes;
mod server;

use lead_funnel::error::AppError;

/// Parses the command line and dispatches to the selected command.
pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
