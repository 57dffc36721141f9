//! Single-paper resource views and their URIs.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use super::taxonomy::TAXONOMY_MARKDOWN;
use crate::error::{ArxivError, Result};
use crate::service::ArxivService;

pub const PAPERS_PREFIX: &str = "arxiv://papers/";
pub const TAXONOMY_URI: &str = "arxiv://taxonomy";

pub const ABSTRACT_URI_TEMPLATE: &str = "arxiv://papers/{id}/abstract";
pub const METADATA_URI_TEMPLATE: &str = "arxiv://papers/{id}/metadata";
pub const PDF_URI_TEMPLATE: &str = "arxiv://papers/{id}/pdf";

pub const MIME_TEXT: &str = "text/plain";
pub const MIME_JSON: &str = "application/json";
pub const MIME_PDF: &str = "application/pdf";
pub const MIME_MARKDOWN: &str = "text/markdown";

/// A resource URI understood by [`ResourceProjector::read`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceUri {
    Abstract(String),
    Metadata(String),
    Pdf(String),
    Taxonomy,
}

impl ResourceUri {
    /// Parse `arxiv://taxonomy` or `arxiv://papers/{id}/{view}`.
    ///
    /// The id is everything between the prefix and the last `/`, so old-style
    /// identifiers such as `math.GT/0104020` survive.
    pub fn parse(uri: &str) -> Option<Self> {
        if uri == TAXONOMY_URI {
            return Some(ResourceUri::Taxonomy);
        }

        let rest = uri.strip_prefix(PAPERS_PREFIX)?;
        let (id, view) = rest.rsplit_once('/')?;
        if id.is_empty() {
            return None;
        }

        match view {
            "abstract" => Some(ResourceUri::Abstract(id.to_string())),
            "metadata" => Some(ResourceUri::Metadata(id.to_string())),
            "pdf" => Some(ResourceUri::Pdf(id.to_string())),
            _ => None,
        }
    }

    pub fn uri(&self) -> String {
        match self {
            ResourceUri::Abstract(id) => format!("{}{}/abstract", PAPERS_PREFIX, id),
            ResourceUri::Metadata(id) => format!("{}{}/metadata", PAPERS_PREFIX, id),
            ResourceUri::Pdf(id) => format!("{}{}/pdf", PAPERS_PREFIX, id),
            ResourceUri::Taxonomy => TAXONOMY_URI.to_string(),
        }
    }
}

/// Contents of one resource read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceContents {
    pub uri: String,
    pub mime_type: &'static str,
    pub body: ResourceBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceBody {
    Text(String),
    /// Base64-encoded bytes
    Blob(String),
}

impl ResourceContents {
    fn text(uri: String, mime_type: &'static str, text: String) -> Self {
        Self {
            uri,
            mime_type,
            body: ResourceBody::Text(text),
        }
    }

    /// Text of a text resource, or the base64 payload of a blob
    pub fn as_str(&self) -> &str {
        match &self.body {
            ResourceBody::Text(text) | ResourceBody::Blob(text) => text,
        }
    }
}

/// Derives resource views from single-paper lookups
#[derive(Debug, Clone)]
pub struct ResourceProjector {
    service: ArxivService,
}

impl ResourceProjector {
    pub fn new(service: ArxivService) -> Self {
        Self { service }
    }

    /// Read any supported resource URI
    pub async fn read(&self, uri: &str) -> Result<ResourceContents> {
        match ResourceUri::parse(uri) {
            Some(ResourceUri::Abstract(id)) => self.abstract_text(&id).await,
            Some(ResourceUri::Metadata(id)) => self.metadata(&id).await,
            Some(ResourceUri::Pdf(id)) => self.pdf(&id).await,
            Some(ResourceUri::Taxonomy) => Ok(self.taxonomy()),
            None => Err(ArxivError::NotFound(format!("resource {}", uri))),
        }
    }

    /// The paper's abstract as plain text
    pub async fn abstract_text(&self, id: &str) -> Result<ResourceContents> {
        tracing::info!("Reading abstract for {}", id);

        let entry = self.service.find_entry(id).await?;
        let text = entry.summary().unwrap_or_default().to_string();
        Ok(ResourceContents::text(
            ResourceUri::Abstract(id.to_string()).uri(),
            MIME_TEXT,
            text,
        ))
    }

    /// The full entry as a JSON object
    pub async fn metadata(&self, id: &str) -> Result<ResourceContents> {
        tracing::info!("Reading metadata for {}", id);

        let entry = self.service.find_entry(id).await?;
        let json = serde_json::to_string(&entry).map_err(|source| ArxivError::Serialization {
            id: id.to_string(),
            source,
        })?;
        Ok(ResourceContents::text(
            ResourceUri::Metadata(id.to_string()).uri(),
            MIME_JSON,
            json,
        ))
    }

    /// The PDF, base64-encoded
    pub async fn pdf(&self, id: &str) -> Result<ResourceContents> {
        tracing::info!("Reading PDF for {}", id);

        let bytes = self.service.fetch_pdf(id).await?;
        tracing::debug!("Fetched {} PDF bytes for {}", bytes.len(), id);

        Ok(ResourceContents {
            uri: ResourceUri::Pdf(id.to_string()).uri(),
            mime_type: MIME_PDF,
            body: ResourceBody::Blob(BASE64.encode(&bytes)),
        })
    }

    /// Category taxonomy as markdown; no network call
    pub fn taxonomy(&self) -> ResourceContents {
        tracing::info!("Reading taxonomy");
        ResourceContents::text(
            TAXONOMY_URI.to_string(),
            MIME_MARKDOWN,
            TAXONOMY_MARKDOWN.to_string(),
        )
    }
}
