//! HTTP plumbing behind the clients.
//!
//! Both call surfaces drive the same pipeline through [`Transport`]. The async
//! transport suspends at every round trip; the blocking transport performs the
//! round trip on the calling thread while its future is polled.

use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

use crate::error::SearchResult;

pub const JSON_RPC_CONTENT_TYPE: &str = "application/json-rpc";
pub const AUTH_HEADER: &str = "x-authorization-token";

/// Outbound HTTP capability used by the search pipeline
pub trait Transport {
    /// GET `url` and return the raw response body
    fn fetch_image(&self, url: &str) -> impl Future<Output = SearchResult<Vec<u8>>> + Send;

    /// POST an encoded JSON-RPC envelope and decode the JSON reply
    fn post_rpc(
        &self,
        endpoint: &str,
        token: &str,
        body: Vec<u8>,
    ) -> impl Future<Output = SearchResult<Value>> + Send;
}

/// Non-blocking transport backed by `reqwest::Client`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> SearchResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn fetch_image(&self, url: &str) -> SearchResult<Vec<u8>> {
        tracing::debug!("Fetching image from: {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn post_rpc(&self, endpoint: &str, token: &str, body: Vec<u8>) -> SearchResult<Value> {
        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, JSON_RPC_CONTENT_TYPE)
            .header(AUTH_HEADER, token)
            .body(body)
            .send()
            .await?;

        Ok(response.json().await?)
    }
}

/// Blocking transport backed by `reqwest::blocking::Client`
///
/// Must not be created or used from inside an async runtime.
#[derive(Debug, Clone)]
pub struct BlockingHttpTransport {
    client: reqwest::blocking::Client,
}

impl BlockingHttpTransport {
    pub fn new(timeout: Duration) -> SearchResult<Self> {
        let client = reqwest::blocking::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Transport for BlockingHttpTransport {
    async fn fetch_image(&self, url: &str) -> SearchResult<Vec<u8>> {
        tracing::debug!("Fetching image from: {}", url);

        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }

    async fn post_rpc(&self, endpoint: &str, token: &str, body: Vec<u8>) -> SearchResult<Value> {
        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, JSON_RPC_CONTENT_TYPE)
            .header(AUTH_HEADER, token)
            .body(body)
            .send()?;

        Ok(response.json()?)
    }
}
