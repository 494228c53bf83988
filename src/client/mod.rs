//! Profile and avatar lookups against the remote service.
//!
//! [`Client`] is stateless apart from its base URL and transport. Every call
//! is one blocking round trip: build the URL, fetch once, decode or return
//! the bytes. Nothing is retried, cached or logged above debug level.

use std::borrow::Cow;

use thiserror::Error;

use crate::config::ServiceConfig;
use crate::constants::{AVATAR_PATH, DEFAULT_BASE_URL, USER_PATH};
use crate::models::{AvatarImage, UserProfile};
use crate::transport::{Fetch, HttpTransport, TransportError};

/// Errors returned by [`Client`] operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response body.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// An empty, `.` or `..` identifier. URL parsers collapse these as dot
    /// segments, so no request is sent.
    #[error("invalid identifier '{0}'")]
    InvalidIdentifier(String),

    /// The body was not a valid profile document.
    #[error("failed to decode profile for '{id}': {source}")]
    Decode {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, ClientError::Decode { .. })
    }
}

/// Escape `id` as a single path segment.
fn path_segment(id: &str) -> Result<Cow<'_, str>, ClientError> {
    if matches!(id, "" | "." | "..") {
        return Err(ClientError::InvalidIdentifier(id.to_string()));
    }
    Ok(urlencoding::encode(id))
}

/// Client for the profile and avatar endpoints.
#[derive(Debug, Clone)]
pub struct Client<F = HttpTransport> {
    transport: F,
    base_url: String,
}

impl Client<HttpTransport> {
    /// Client for the public service with default transport settings.
    pub fn new() -> Result<Self, TransportError> {
        Ok(Self::with_transport(HttpTransport::new()?, DEFAULT_BASE_URL))
    }

    /// Client built from the `[service]` config section.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::from_config(config)?;
        Ok(Self::with_transport(transport, &config.base_url))
    }
}

impl<F: Fetch> Client<F> {
    /// Client using a custom transport. Trailing slashes on `base_url` are
    /// dropped.
    pub fn with_transport(transport: F, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &F {
        &self.transport
    }

    /// URL of the profile endpoint for `id`.
    pub fn user_url(&self, id: &str) -> Result<String, ClientError> {
        Ok(format!("{}{USER_PATH}{}", self.base_url, path_segment(id)?))
    }

    /// URL of the avatar endpoint for `id` at `size` pixels.
    pub fn avatar_url(&self, id: &str, size: u32) -> Result<String, ClientError> {
        Ok(format!("{}{AVATAR_PATH}{}/{size}", self.base_url, path_segment(id)?))
    }

    /// Look up the profile of a username or UUID.
    ///
    /// A response that is not a complete profile document, including error
    /// pages served with a 4xx or 5xx status, yields [`ClientError::Decode`].
    /// An empty, `.` or `..` identifier fails before anything is sent.
    pub fn user(&self, id: &str) -> Result<UserProfile, ClientError> {
        let body = self.transport.fetch(&self.user_url(id)?)?;
        serde_json::from_slice(&body).map_err(|source| {
            tracing::debug!(id, bytes = body.len(), error = %source, "profile decode failed");
            ClientError::Decode {
                id: id.to_string(),
                source,
            }
        })
    }

    /// Fetch the rendered avatar of a username or UUID.
    ///
    /// The bytes are returned as received. Whatever the service sends,
    /// including an error page, is not inspected.
    pub fn avatar(&self, id: &str, size: u32) -> Result<AvatarImage, ClientError> {
        Ok(self.transport.fetch(&self.avatar_url(id, size)?)?)
    }
}
