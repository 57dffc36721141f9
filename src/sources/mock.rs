//! Mock transport for testing purposes.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::models::SearchRequest;
use crate::sources::{PdfTransport, SearchTransport, SourceError};

/// A mock transport that returns predefined responses and records requests.
#[derive(Debug, Default)]
pub struct MockSource {
    search_body: Mutex<Option<String>>,
    pdf_bytes: Mutex<Option<Vec<u8>>>,
    requests: Mutex<Vec<SearchRequest>>,
}

impl MockSource {
    /// Create a new mock source with no canned responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw body returned by every search.
    pub fn with_search_body(self, body: impl Into<String>) -> Self {
        self.set_search_body(body);
        self
    }

    /// Set the PDF returned by every fetch.
    pub fn with_pdf(self, bytes: impl Into<Vec<u8>>) -> Self {
        if let Ok(mut guard) = self.pdf_bytes.lock() {
            *guard = Some(bytes.into());
        }
        self
    }

    /// Replace the search body.
    pub fn set_search_body(&self, body: impl Into<String>) {
        if let Ok(mut guard) = self.search_body.lock() {
            *guard = Some(body.into());
        }
    }

    /// Requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SearchTransport for MockSource {
    async fn search(&self, request: &SearchRequest) -> Result<String, SourceError> {
        if let Ok(mut guard) = self.requests.lock() {
            guard.push(request.clone());
        }

        self.search_body
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
            .ok_or_else(|| SourceError::Network("mock: no search response configured".to_string()))
    }
}

#[async_trait]
impl PdfTransport for MockSource {
    async fn fetch_pdf(&self, id: &str) -> Result<Vec<u8>, SourceError> {
        self.pdf_bytes
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
            .ok_or_else(|| SourceError::Network(format!("mock: no PDF configured for {}", id)))
    }
}
