//! Transports to arxiv.org.
//!
//! The search and PDF endpoints sit behind the [`SearchTransport`] and
//! [`PdfTransport`] traits so the rest of the crate never talks HTTP directly.
//! [`ArxivSource`] is the real implementation; [`MockSource`] serves canned
//! responses for tests.
//!
//! Transports own everything network-related: timeouts, connection pooling and
//! retrying transient failures. Callers see either a body or a [`SourceError`].

mod arxiv;
pub mod mock;

pub use arxiv::ArxivSource;
pub use mock::MockSource;

use crate::models::SearchRequest;
use async_trait::async_trait;

/// Search endpoint: resolved request in, raw Atom XML out.
#[async_trait]
pub trait SearchTransport: Send + Sync + std::fmt::Debug {
    async fn search(&self, request: &SearchRequest) -> Result<String, SourceError>;
}

/// PDF endpoint: paper identifier in, PDF bytes out.
#[async_trait]
pub trait PdfTransport: Send + Sync + std::fmt::Debug {
    async fn fetch_pdf(&self, id: &str) -> Result<Vec<u8>, SourceError>;
}

/// Errors that can occur when talking to arxiv.org
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// The request timed out
    #[error("Request timed out")]
    Timeout,

    /// Rate limit exceeded (HTTP 429)
    #[error("Rate limit exceeded")]
    RateLimit,

    /// Non-success HTTP status
    #[error("API error: HTTP {status}")]
    Api { status: u16 },

    /// The server answered but the body is unusable
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SourceError::Timeout
        } else if let Some(status) = err.status() {
            SourceError::Api {
                status: status.as_u16(),
            }
        } else {
            SourceError::Network(err.to_string())
        }
    }
}
