//! HTTP fetcher for termweb.
//!
//! Implements `FetcherTrait` — a blocking GET that returns the response body
//! text or a `FetchError`. The whole browser is single-threaded and
//! synchronous, so the blocking reqwest client is used directly.

use std::time::Duration;

use crate::types::errors::FetchError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("termweb/", env!("CARGO_PKG_VERSION"));

/// Trait defining the fetch operation, so pages can be built against a fake
/// fetcher in tests.
pub trait FetcherTrait {
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// Fetcher backed by a blocking reqwest client.
pub struct Fetcher {
    client: reqwest::blocking::Client,
}

impl Fetcher {
    /// Creates a fetcher with a request timeout and a descriptive user agent.
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::ClientError(e.to_string()))?;

        Ok(Self { client })
    }
}

impl FetcherTrait for Fetcher {
    /// Issues a GET request and returns the body text.
    ///
    /// Non-success status codes still return whatever body the server sent;
    /// only transport-level failures become errors.
    fn get(&self, url: &str) -> Result<String, FetchError> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::NetworkError(e.to_string()))?;

        log::debug!("{} -> {}", url, response.status());

        response
            .text()
            .map_err(|e| FetchError::NetworkError(e.to_string()))
    }
}
