//! Helpdesk API client

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::upstream::UpstreamTicket;

/// Client for the helpdesk ticket listing endpoint.
#[derive(Clone)]
pub struct TicketClient {
    client: Client,
    api_url: String,
    api_token: String,
}

impl TicketClient {
    /// Creates a client whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamUnavailable` if the underlying HTTP client cannot be built.
    pub fn new(
        api_url: impl Into<String>,
        api_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CacheError::UpstreamUnavailable(e.to_string()))?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            api_token: api_token.into(),
        })
    }

    /// Creates a client from the process configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.api_url.clone(),
            config.api_token.clone(),
            config.request_timeout(),
        )
    }

    /// Endpoint this client talks to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetches the full ticket listing.
    ///
    /// Error messages never carry the request URL, since the token travels in
    /// its query string.
    ///
    /// # Errors
    ///
    /// - `UpstreamUnavailable` for network failures, timeouts and non-2xx statuses
    /// - `MalformedResponse` when the body is not a JSON array of ticket objects
    pub async fn fetch_tickets(&self) -> Result<Vec<UpstreamTicket>> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("token", self.api_token.as_str())])
            .send()
            .await
            .map_err(upstream_unavailable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CacheError::UpstreamUnavailable(format!(
                "upstream answered with status {}",
                status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(upstream_unavailable)?;
        debug!(bytes = body.len(), "received ticket listing");

        serde_json::from_slice::<Vec<UpstreamTicket>>(&body)
            .map_err(|e| CacheError::MalformedResponse(e.to_string()))
    }
}

fn upstream_unavailable(error: reqwest::Error) -> CacheError {
    CacheError::UpstreamUnavailable(error.without_url().to_string())
}
