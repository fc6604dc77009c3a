//! HTTP client seam.
//!
//! The validator only needs "send a GET with these headers, give me the
//! response headers". `HeaderClient` captures that so the validator can be
//! driven by `reqwest` in production and by fakes in tests.

use async_trait::async_trait;
use log::debug;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use crate::error_handling::{categorize_reqwest_error, ClientError};
use crate::spec::MergedHeaders;

/// Headers of a received response.
#[derive(Debug, Clone)]
pub struct ResponseHeaders {
    status: StatusCode,
    headers: HeaderMap,
}

impl ResponseHeaders {
    /// Wraps a status and header map.
    pub fn new(status: StatusCode, headers: HeaderMap) -> Self {
        Self { status, headers }
    }

    /// HTTP status of the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// All values of `name`, in the order the response carried them.
    ///
    /// Lookup is case-insensitive. An absent header, or a name that is not a
    /// valid header name, yields an empty list. Non-UTF-8 bytes are replaced.
    pub fn values(&self, name: &str) -> Vec<String> {
        self.headers
            .get_all(name)
            .iter()
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
            .collect()
    }
}

/// Sends a GET request and returns the response headers.
#[async_trait]
pub trait HeaderClient {
    /// Requests `url` carrying `headers` (every value of a name is sent, in order).
    async fn send(
        &self,
        url: &str,
        headers: &MergedHeaders,
    ) -> Result<ResponseHeaders, ClientError>;
}

/// `HeaderClient` backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Wraps a configured client (see `initialization::init_client`).
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HeaderClient for ReqwestClient {
    async fn send(
        &self,
        url: &str,
        headers: &MergedHeaders,
    ) -> Result<ResponseHeaders, ClientError> {
        let mut builder = self.client.get(url);
        for (name, values) in headers {
            for value in values {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }
        let request = builder.build().map_err(ClientError::Build)?;
        debug!("GET {} with {} request header(s)", url, request.headers().len());

        let response = self
            .client
            .execute(request)
            .await
            .map_err(categorize_reqwest_error)?;

        // The body is never read; dropping the response releases the connection
        Ok(ResponseHeaders::new(response.status(), response.headers().clone()))
    }
}
