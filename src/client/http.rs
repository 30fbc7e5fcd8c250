//! HTTP implementation of the API client
//!
//! Thin reqwest wrapper: bearer-token auth, base-URL joining, envelope
//! unwrapping. No retries and no rate limiting; if the API wants the tap to
//! back off, the run fails and the operator re-runs it.

use super::{ApiClient, Endpoint, Page};
use crate::error::{Error, Result};
use crate::types::Record;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Request timeout for a single API call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// API client backed by reqwest
pub struct HttpApiClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl HttpApiClient {
    /// Create a client for the given endpoint, authenticating with the
    /// given API key.
    pub fn new(endpoint: &str, api_key: impl Into<String>) -> Result<Self> {
        let base_url = Url::parse(endpoint)?;
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(format!("tap-oncall/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
        })
    }

    /// GET a path relative to the base URL and parse the JSON body
    async fn get_json(&self, path: &str, params: &[(&str, &str)]) -> Result<Value> {
        let url = self.base_url.join(path)?;
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.api_key)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        Ok(response.json().await?)
    }

    /// Unwrap the resource envelope into a list of record objects
    fn unwrap_envelope(endpoint: &Endpoint, body: Value) -> Result<Vec<Record>> {
        let items = body.get(endpoint.envelope).and_then(Value::as_array).ok_or_else(|| {
            Error::decode(format!(
                "response for '{}' has no '{}' array",
                endpoint.path, endpoint.envelope
            ))
        })?;

        items
            .iter()
            .map(|item| {
                item.as_object().cloned().ok_or_else(|| {
                    Error::decode(format!(
                        "element in '{}' is not an object",
                        endpoint.envelope
                    ))
                })
            })
            .collect()
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn list_page(
        &self,
        endpoint: &Endpoint,
        page_size: u32,
        after: Option<&str>,
    ) -> Result<Page> {
        let page_size = page_size.to_string();
        let mut params = vec![("page_size", page_size.as_str())];
        if let Some(after) = after {
            params.push(("after", after));
        }

        let body = self.get_json(endpoint.path, &params).await?;
        Ok(Page {
            items: Self::unwrap_envelope(endpoint, body)?,
        })
    }

    async fn list(&self, endpoint: &Endpoint, params: &[(&str, &str)]) -> Result<Vec<Record>> {
        let body = self.get_json(endpoint.path, params).await?;
        Self::unwrap_envelope(endpoint, body)
    }
}
