//! Resource handler bridging [`ResourceProjector`] to pmcp.

use async_trait::async_trait;
use pmcp::types::{Content, ListResourcesResult, ReadResourceResult, ResourceInfo};
use pmcp::{Error, RequestHandlerExtra, ResourceHandler};

use crate::error::ArxivError;
use crate::projector::resources::{
    ABSTRACT_URI_TEMPLATE, METADATA_URI_TEMPLATE, MIME_MARKDOWN, PDF_URI_TEMPLATE, TAXONOMY_URI,
};
use crate::projector::{ResourceContents, ResourceProjector, ResourceUri};

/// Serves `arxiv://papers/{id}/...` and `arxiv://taxonomy`
#[derive(Debug, Clone)]
pub struct ArxivResources {
    projector: ResourceProjector,
}

impl ArxivResources {
    pub fn new(projector: ResourceProjector) -> Self {
        Self { projector }
    }

    /// Human-readable list of the templated URIs, shown in the listing
    pub fn templates() -> [&'static str; 3] {
        [ABSTRACT_URI_TEMPLATE, METADATA_URI_TEMPLATE, PDF_URI_TEMPLATE]
    }
}

fn to_content(contents: ResourceContents) -> Content {
    let mime_type = contents.mime_type.to_string();
    Content::Resource {
        text: Some(contents.as_str().to_string()),
        uri: contents.uri,
        mime_type: Some(mime_type),
    }
}

pub(crate) fn to_pmcp_error(err: ArxivError) -> Error {
    match err {
        ArxivError::NotFound(msg) => Error::invalid_params(format!("Not found: {}", msg)),
        other => Error::internal(other.to_string()),
    }
}

#[async_trait]
impl ResourceHandler for ArxivResources {
    async fn read(&self, uri: &str, _extra: RequestHandlerExtra) -> Result<ReadResourceResult, Error> {
        self.read_uri(uri).await
    }

    async fn list(
        &self,
        _cursor: Option<String>,
        _extra: RequestHandlerExtra,
    ) -> Result<ListResourcesResult, Error> {
        Ok(self.listing())
    }
}

impl ArxivResources {
    /// Read a resource and convert it to the pmcp result shape
    pub async fn read_uri(&self, uri: &str) -> Result<ReadResourceResult, Error> {
        if ResourceUri::parse(uri).is_none() {
            return Err(Error::invalid_params(format!("Unknown resource URI: {}", uri)));
        }

        let contents = self.projector.read(uri).await.map_err(|e| {
            tracing::warn!("Resource read failed for {}: {}", uri, e);
            to_pmcp_error(e)
        })?;

        Ok(ReadResourceResult {
            contents: vec![to_content(contents)],
        })
    }

    /// Static listing: the taxonomy, with the per-paper templates described
    pub fn listing(&self) -> ListResourcesResult {
        ListResourcesResult {
            resources: vec![ResourceInfo {
                uri: TAXONOMY_URI.to_string(),
                name: "arXiv Category Taxonomy".to_string(),
                description: Some(format!(
                    "Category codes for the cat: query prefix. Per-paper resources: {}",
                    Self::templates().join(", ")
                )),
                mime_type: Some(MIME_MARKDOWN.to_string()),
            }],
            next_cursor: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projector::ResourceBody;

    #[test]
    fn test_to_content_keeps_uri_and_mime() {
        let content = to_content(ResourceContents {
            uri: "arxiv://papers/1/abstract".to_string(),
            mime_type: "text/plain",
            body: ResourceBody::Text("hello".to_string()),
        });

        match content {
            Content::Resource {
                uri,
                text,
                mime_type,
                ..
            } => {
                assert_eq!(uri, "arxiv://papers/1/abstract");
                assert_eq!(text.as_deref(), Some("hello"));
                assert_eq!(mime_type.as_deref(), Some("text/plain"));
            }
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn test_templates() {
        assert!(ArxivResources::templates().contains(&"arxiv://papers/{id}/pdf"));
    }
}
