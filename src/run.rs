/// The run pipeline: credential → fetch → project → write, each step gated
/// on the previous one succeeding.
use thiserror::Error;
use tracing::{debug, info};

use crate::api::{ApiClient, ApiError};
use crate::cli::Cli;
use crate::credential::{self, CredentialError};
use crate::project::project;
use crate::schema::{ColumnSpec, SchemaError};
use crate::writer::{self, WriteError};

/// Any failure that aborts a run. All variants are terminal; none are
/// retried. They collapse to a single non-zero exit status in `main`.
#[derive(Debug, Error)]
pub enum RunError {
    /// The token argument resolved to nothing usable.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// The requested columns do not match the known schema, or a fetched
    /// record is missing a requested column.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The paginated fetch failed; no output file was touched.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The destination file could not be written or replaced.
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Run one backup pass against the production endpoint.
///
/// # Errors
///
/// Returns the first `RunError` encountered; later stages do not run.
pub fn run(cli: &Cli) -> Result<(), RunError> {
    run_with(cli, &ApiClient::new())
}

/// Run one backup pass against a caller-supplied client (tests inject a
/// client pointed at a mock server).
fn run_with(cli: &Cli, client: &ApiClient) -> Result<(), RunError> {
    let token = credential::resolve(&cli.token)?;

    // Columns are validated against the static schema before any network I/O.
    let spec = match &cli.columns {
        Some(names) => ColumnSpec::parse(names)?,
        None => ColumnSpec::all(),
    };
    debug!("exporting {} columns", spec.columns().len());

    let records = client.fetch_all(&token)?;
    info!("fetched {} records", records.len());

    let rows = records
        .iter()
        .map(|record| project(record, &spec))
        .collect::<Result<Vec<_>, _>>()?;

    writer::write_csv(&cli.output, spec.columns(), &rows)?;
    Ok(())
}
