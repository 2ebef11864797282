use std::process::ExitCode;

use clap::Parser;
use supabase_fetch::{dotenv_problem, logging, run, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    logging::init();
    if let Some(err) = dotenv_problem(dotenv) {
        tracing::warn!(error = %err, "Failed to load .env");
    }

    let config = Cli::parse().into_config();
    match run(config, &mut std::io::stdout()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Table fetch failed");
            ExitCode::FAILURE
        }
    }
}
