//! Command-line front end for [`supabase_fetch_core`].

use std::io::{self, Write};
use std::path::PathBuf;

use supabase_fetch_core::{FetchConfig, FetchResult, TableClient};
use tracing::info;

pub mod cli;
pub mod logging;

pub use cli::Cli;

/// Pick out a `.env` load failure worth reporting. A missing file is not one.
pub fn dotenv_problem(result: Result<PathBuf, dotenvy::Error>) -> Option<dotenvy::Error> {
    match result {
        Ok(_) => None,
        Err(dotenvy::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => Some(e),
    }
}

/// Fetch the configured table once and write the body to `out` unchanged.
///
/// The body is written whatever the status, unless the config fails on
/// error statuses. Nothing is written when an error is returned.
pub async fn run<W: Write>(config: FetchConfig, out: &mut W) -> FetchResult<()> {
    let client = TableClient::new(config)?;
    let response = client.fetch().await?;
    info!(
        status = response.status(),
        fail_on_status = client.config().fail_on_status,
        table = %client.config().table,
        "Fetched table"
    );

    out.write_all(response.body().as_bytes())?;
    out.flush()?;
    Ok(())
}
