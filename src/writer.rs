/// CSV serialization with atomic replacement of the destination file.
///
/// Rows are written to a temporary file in the destination's directory and
/// renamed into place, so a reader never observes a half-written file and a
/// failed run leaves any pre-existing destination untouched.
use std::path::Path;

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

/// Errors from writing the destination file.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The temporary file could not be created next to the destination.
    #[error("cannot create temporary file in '{dir}': {source}")]
    CreateTemp {
        /// Directory the temp file was attempted in.
        dir: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A row could not be serialized or flushed.
    #[error("cannot write CSV data: {0}")]
    Csv(#[from] csv::Error),

    /// The temporary file could not be renamed over the destination.
    #[error("cannot replace '{path}': {source}")]
    Replace {
        /// The destination path.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Write the header and all rows to `dest` as comma-separated CSV with
/// standard quoting (fields containing commas, quotes, or line breaks are
/// quoted; embedded quotes are doubled).
///
/// # Errors
///
/// Returns `WriteError` on any I/O or serialization failure. The temporary
/// file is removed on failure; `dest` is only ever replaced whole.
pub fn write_csv(dest: &Path, header: &[String], rows: &[Vec<String>]) -> Result<(), WriteError> {
    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir).map_err(|source| WriteError::CreateTemp {
        dir: dir.display().to_string(),
        source,
    })?;

    let mut csv_writer = csv::Writer::from_writer(tmp.as_file());
    csv_writer.write_record(header)?;
    for row in rows {
        csv_writer.write_record(row)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    drop(csv_writer);

    tmp.persist(dest).map_err(|err| WriteError::Replace {
        path: dest.display().to_string(),
        source: err.error,
    })?;
    info!("wrote {} rows to {}", rows.len(), dest.display());
    Ok(())
}
