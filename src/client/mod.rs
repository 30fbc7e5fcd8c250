//! API client boundary
//!
//! The tap talks to the source API through the [`ApiClient`] trait so the
//! engine and streams can be exercised against a fake in tests. The
//! production implementation is [`HttpApiClient`].
//!
//! Listing endpoints are cursor paginated: each page is requested with a
//! page-size bound and an opaque "after" cursor, and the response wraps the
//! elements in a JSON envelope keyed by resource name, e.g.
//! `{"users": [...]}`.

mod http;

pub use http::HttpApiClient;

use crate::error::{Error, Result};
use crate::types::Record;
use async_trait::async_trait;
use tracing::debug;

#[cfg(test)]
mod tests;

/// Page size used by all paginated streams
pub const DEFAULT_PAGE_SIZE: u32 = 250;

/// A listing endpoint: request path plus the envelope key that wraps the
/// returned elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Request path, e.g. `/v2/users`
    pub path: &'static str,
    /// Envelope key in the response body, e.g. `users`
    pub envelope: &'static str,
}

impl Endpoint {
    /// Create an endpoint descriptor
    pub const fn new(path: &'static str, envelope: &'static str) -> Self {
        Self { path, envelope }
    }
}

/// One page of a paginated listing
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Elements returned for this page. An empty page ends pagination.
    pub items: Vec<Record>,
}

/// Outbound calls the tap makes against the source API.
///
/// Implementations perform no retries; a failed call aborts the stream
/// being extracted.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Fetch one page of a cursor-paginated listing endpoint
    async fn list_page(
        &self,
        endpoint: &Endpoint,
        page_size: u32,
        after: Option<&str>,
    ) -> Result<Page>;

    /// Fetch an unpaginated listing with the given query parameters
    async fn list(&self, endpoint: &Endpoint, params: &[(&str, &str)]) -> Result<Vec<Record>>;
}

/// Drive cursor pagination to completion and return the accumulated
/// elements.
///
/// The cursor for the next page is the `id` of the last element of the
/// current page; an empty page ends the loop. The full record set is
/// materialized in memory, so memory use is proportional to the total
/// record count.
pub async fn paginate(
    client: &dyn ApiClient,
    endpoint: &Endpoint,
    page_size: u32,
) -> Result<Vec<Record>> {
    let mut results: Vec<Record> = Vec::new();
    let mut after: Option<String> = None;

    loop {
        debug!(
            path = endpoint.path,
            page_size,
            after = after.as_deref(),
            "loading page"
        );
        let page = client.list_page(endpoint, page_size, after.as_deref()).await?;
        if page.items.is_empty() {
            return Ok(results);
        }
        after = Some(page_cursor(endpoint, &page)?);
        results.extend(page.items);
    }
}

/// Derive the next-page cursor from the last element of a page
fn page_cursor(endpoint: &Endpoint, page: &Page) -> Result<String> {
    page.items
        .last()
        .and_then(|item| item.get("id"))
        .and_then(serde_json::Value::as_str)
        .map(String::from)
        .ok_or_else(|| {
            Error::decode(format!(
                "element in '{}' page has no string 'id' to use as cursor",
                endpoint.envelope
            ))
        })
}
