//! Search orchestration: request in, parsed [`Feed`] out.

use std::sync::Arc;

use crate::atom;
use crate::error::{ArxivError, Result};
use crate::models::{Entry, Feed, SearchRequest};
use crate::sources::{PdfTransport, SearchTransport};

/// Runs searches through a transport and parses the responses.
///
/// Holds no state besides the transports; every call builds a fresh [`Feed`].
#[derive(Debug, Clone)]
pub struct ArxivService {
    search: Arc<dyn SearchTransport>,
    pdf: Arc<dyn PdfTransport>,
}

impl ArxivService {
    pub fn new(search: Arc<dyn SearchTransport>, pdf: Arc<dyn PdfTransport>) -> Self {
        Self { search, pdf }
    }

    /// Use one value for both transports
    pub fn from_source<S>(source: Arc<S>) -> Self
    where
        S: SearchTransport + PdfTransport + 'static,
    {
        Self {
            search: source.clone(),
            pdf: source,
        }
    }

    /// Run a search and parse the response.
    ///
    /// Defaults are applied first (`max_results` 0 becomes 5, an id list
    /// overrides the free-text query). Zero matches is an empty feed, not an error.
    pub async fn search(&self, request: SearchRequest) -> Result<Feed> {
        let request = request.resolved();
        let target = request.describe();

        let body = self
            .search
            .search(&request)
            .await
            .map_err(|e| ArxivError::fetch(format!("search results for {}", target), e))?;

        let feed = atom::parse(body.as_bytes()).map_err(|e| match e {
            ArxivError::Parse(reason) => ArxivError::Parse(format!("{} ({})", reason, target)),
            other => other,
        })?;

        tracing::debug!("{} returned {} entries", target, feed.entries().len());
        Ok(feed)
    }

    /// Look up several papers at once. Page size equals the number of ids.
    pub async fn get_papers<S: AsRef<str>>(&self, ids: &[S]) -> Result<Feed> {
        let request = SearchRequest::id_list(ids).max_results(ids.len());
        self.search(request).await
    }

    /// Look up exactly one paper; no match is [`ArxivError::NotFound`].
    pub async fn find_entry(&self, id: &str) -> Result<Entry> {
        let feed = self.search(SearchRequest::id_list([id]).max_results(1)).await?;
        feed.into_first_entry()
            .ok_or_else(|| ArxivError::NotFound(id.to_string()))
    }

    /// Raw PDF bytes for an identifier
    pub async fn fetch_pdf(&self, id: &str) -> Result<Vec<u8>> {
        self.pdf
            .fetch_pdf(id)
            .await
            .map_err(|e| ArxivError::fetch(format!("PDF for {}", id), e))
    }
}
