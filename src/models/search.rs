//! Search request models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default page size when the caller asks for zero or nothing
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Sort field understood by the arXiv API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    Relevance,
    LastUpdatedDate,
    SubmittedDate,
}

impl SortBy {
    /// Name of the value on the wire (`sortBy=...`)
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Relevance => "relevance",
            SortBy::LastUpdatedDate => "lastUpdatedDate",
            SortBy::SubmittedDate => "submittedDate",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction understood by the arXiv API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved parameters for one call to the search transport.
///
/// Build it with [`SearchRequest::query`] or [`SearchRequest::id_list`]; defaults
/// (`start = 0`, `max_results = 5`) are already applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    /// Boolean `search_query` expression
    pub search_query: Option<String>,

    /// Comma-joined identifiers for `id_list`
    pub id_list: Option<String>,

    pub start: usize,

    pub max_results: usize,

    pub sort_by: Option<SortBy>,

    pub sort_order: Option<SortOrder>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            search_query: None,
            id_list: None,
            start: 0,
            max_results: DEFAULT_MAX_RESULTS,
            sort_by: None,
            sort_order: None,
        }
    }
}

impl SearchRequest {
    /// Free-text query mode
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            search_query: Some(query.into()),
            ..Default::default()
        }
    }

    /// Direct lookup mode. `ids` are joined with commas.
    pub fn id_list<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: Vec<String> = ids.into_iter().map(|id| id.as_ref().to_string()).collect();
        Self {
            id_list: Some(ids.join(",")),
            ..Default::default()
        }
    }

    pub fn start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Set the page size. Zero falls back to [`DEFAULT_MAX_RESULTS`].
    pub fn max_results(mut self, max: usize) -> Self {
        self.max_results = if max == 0 { DEFAULT_MAX_RESULTS } else { max };
        self
    }

    pub fn sort_by(mut self, sort: Option<SortBy>) -> Self {
        self.sort_by = sort;
        self
    }

    pub fn sort_order(mut self, order: Option<SortOrder>) -> Self {
        self.sort_order = order;
        self
    }

    /// Apply the id-list-wins rule: when a non-empty id list is present the
    /// free-text query is dropped.
    pub fn resolved(mut self) -> Self {
        if self.id_list.as_deref().is_some_and(|ids| !ids.is_empty()) {
            if let Some(query) = self.search_query.take() {
                tracing::debug!("Ignoring search_query '{}' in favour of id_list", query);
            }
        }
        if self.max_results == 0 {
            self.max_results = DEFAULT_MAX_RESULTS;
        }
        self
    }

    /// Short description for diagnostics (`query 'x'` / `ids 'a,b'`)
    pub fn describe(&self) -> String {
        match (&self.id_list, &self.search_query) {
            (Some(ids), _) => format!("ids '{}'", ids),
            (None, Some(query)) => format!("query '{}'", query),
            (None, None) => "empty query".to_string(),
        }
    }
}

/// Inputs to the query builder. Every field is optional; empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFields {
    #[serde(default)]
    pub topic: Option<String>,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub year: Option<String>,
}

impl QueryFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }
}
