//! Fetch trait and the HTTP transport behind it.
//!
//! The client never talks to the network directly. It hands a complete URL
//! to a [`Fetch`] implementation and gets the whole response body back,
//! which lets tests substitute a recording mock for [`HttpTransport`].

pub mod http;

use std::sync::Arc;

use thiserror::Error;

pub use http::HttpTransport;

/// Errors from the transport layer.
///
/// HTTP status codes never produce one of these: any response the server
/// actually sent is a successful fetch.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Send {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Failure reported by a non-reqwest [`Fetch`] implementation.
    #[error("request to {url} failed: {source}")]
    Custom {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Issue a single GET and return the complete body.
///
/// Implementations make exactly one attempt per call and release the
/// response before returning, whatever the outcome.
pub trait Fetch: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}

impl<T: Fetch + ?Sized> Fetch for &T {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        (**self).fetch(url)
    }
}

impl<T: Fetch + ?Sized> Fetch for Arc<T> {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        (**self).fetch(url)
    }
}

impl<T: Fetch + ?Sized> Fetch for Box<T> {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        (**self).fetch(url)
    }
}
