/// Errors from the addy.io API layer.
use thiserror::Error;

/// Errors that abort a paginated fetch. None are retried; any of them ends
/// the run before an output file is touched.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be completed (connection reset, timeout, TLS).
    #[error("request for page {page} failed: {source}")]
    Transport {
        /// Page being requested when the transport failed.
        page: u32,
        /// The underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("page {page} returned HTTP {status}: {snippet}")]
    Status {
        /// Page that was rejected.
        page: u32,
        /// HTTP status code.
        status: u16,
        /// Bounded excerpt of the response body.
        snippet: String,
    },

    /// The response body was not a valid alias listing.
    #[error("page {page} could not be parsed: {reason}")]
    Parse {
        /// Page whose body failed to parse.
        page: u32,
        /// Parse failure description.
        reason: String,
    },
}
