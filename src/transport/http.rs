//! Blocking reqwest implementation of [`Fetch`].

use std::time::Duration;

use reqwest::blocking::Client;

use super::{Fetch, TransportError};
use crate::config::ServiceConfig;
use crate::constants::USER_AGENT;

/// HTTP transport backed by a pooled blocking reqwest client.
///
/// Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Transport with the default `User-Agent` and no explicit timeout.
    pub fn new() -> Result<Self, TransportError> {
        Self::build(USER_AGENT, None)
    }

    /// Transport using the `User-Agent` and timeout from the service config.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, TransportError> {
        Self::build(
            &config.user_agent,
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    /// Wrap an already configured reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn build(user_agent: &str, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = Client::builder().user_agent(user_agent.to_string());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(TransportError::Build)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpTransport {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        tracing::debug!(url, "GET");

        let response = self.client.get(url).send().map_err(|source| TransportError::Send {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        // `bytes()` consumes the response, so it is released on both arms.
        let body = response.bytes().map_err(|source| TransportError::Body {
            url: url.to_string(),
            source,
        })?;

        tracing::debug!(url, %status, bytes = body.len(), "response received");
        Ok(body.to_vec())
    }
}
