/// Paginated alias retrieval against the addy.io REST API.
///
/// Pagination is offset-based: `page[number]` starting at 1, `page[size]`
/// fixed at 100. An empty `data` array signals the last page. Pages are
/// requested strictly one at a time; records are yielded in page order and,
/// within a page, in the order the API lists them.
use reqwest::header;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use super::errors::ApiError;
use crate::credential::Credential;

/// Production alias-listing endpoint.
pub const DEFAULT_BASE_URL: &str = "https://app.addy.io/api/v1/aliases";

/// Records requested per page.
const PAGE_SIZE: u32 = 100;

/// Longest response-body excerpt carried in an error.
const SNIPPET_MAX: usize = 200;

/// One alias as returned by the API: a column-name → value mapping.
/// The key set is uniform across all records of one run.
pub type AliasRecord = serde_json::Map<String, Value>;

#[derive(Debug, Deserialize)]
struct AliasPage {
    data: Vec<AliasRecord>,
}

/// Blocking client for the alias-listing endpoint.
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    /// Client against the production endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_owned())
    }

    /// Client against an alternate endpoint (tests).
    #[must_use]
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url,
        }
    }

    /// Lazy iterator over all alias records, fetching pages on demand.
    ///
    /// The first error ends iteration; nothing is yielded past it.
    #[must_use]
    pub fn aliases<'a>(&'a self, credential: &'a Credential) -> Aliases<'a> {
        Aliases {
            client: self,
            credential,
            page: 0,
            buffer: Vec::new().into_iter(),
            fetched: 0,
            done: false,
        }
    }

    /// Fetch every record across all pages.
    ///
    /// # Errors
    ///
    /// Returns the first `ApiError`; partial results are discarded.
    pub fn fetch_all(&self, credential: &Credential) -> Result<Vec<AliasRecord>, ApiError> {
        self.aliases(credential).collect()
    }

    fn fetch_page(&self, credential: &Credential, page: u32) -> Result<Vec<AliasRecord>, ApiError> {
        debug!("requesting page {page}");
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("page[size]", PAGE_SIZE.to_string()),
                ("page[number]", page.to_string()),
            ])
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", credential.as_str()),
            )
            .header(header::CONTENT_TYPE, "application/json")
            .header("X-Requested-With", "XMLHttpRequest")
            .send()
            .map_err(|source| ApiError::Transport { page, source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ApiError::Status {
                page,
                status: status.as_u16(),
                snippet: snippet(&body),
            });
        }

        let parsed: AliasPage = response.json().map_err(|source| ApiError::Parse {
            page,
            reason: source.to_string(),
        })?;
        Ok(parsed.data)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator returned by [`ApiClient::aliases`].
pub struct Aliases<'a> {
    client: &'a ApiClient,
    credential: &'a Credential,
    page: u32,
    buffer: std::vec::IntoIter<AliasRecord>,
    fetched: usize,
    done: bool,
}

impl Iterator for Aliases<'_> {
    type Item = Result<AliasRecord, ApiError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.buffer.next() {
                return Some(Ok(record));
            }
            if self.done {
                return None;
            }
            self.page += 1;
            match self.client.fetch_page(self.credential, self.page) {
                Ok(records) if records.is_empty() => {
                    self.done = true;
                    return None;
                }
                Ok(records) => {
                    self.fetched += records.len();
                    info!("page {} fetched, {} records so far", self.page, self.fetched);
                    self.buffer = records.into_iter();
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

/// Trim and bound a response body for inclusion in an error message.
fn snippet(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.len() <= SNIPPET_MAX {
        return trimmed.to_owned();
    }
    let mut end = SNIPPET_MAX;
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &trimmed[..end])
}
