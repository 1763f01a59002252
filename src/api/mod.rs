/// addy.io API layer: authenticated, paginated alias retrieval.
pub mod client;
pub mod errors;

pub use client::{AliasRecord, Aliases, ApiClient};
pub use errors::ApiError;
