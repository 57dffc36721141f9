//! Errors surfaced by the search, parsing and projection layers.

use crate::sources::SourceError;

/// Errors returned to the caller of a tool, resource or prompt.
#[derive(Debug, thiserror::Error)]
pub enum ArxivError {
    /// The response body was not a well-formed Atom feed
    #[error("Failed to parse arXiv response: {0}")]
    Parse(String),

    /// A single-paper lookup matched nothing
    #[error("Paper not found: {0}")]
    NotFound(String),

    /// Search or PDF transport failed
    #[error("Failed to fetch {target}: {source}")]
    Fetch {
        target: String,
        #[source]
        source: SourceError,
    },

    /// An entry could not be rendered as JSON
    #[error("Failed to serialize paper metadata for {id}: {source}")]
    Serialization {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ArxivError {
    pub fn fetch(target: impl Into<String>, source: SourceError) -> Self {
        ArxivError::Fetch {
            target: target.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ArxivError>;
