//! Prompt templates.

use crate::error::{ArxivError, Result};
use crate::models::QueryFields;
use crate::query::build_search_query;
use crate::service::ArxivService;

/// A single user-role prompt message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptMessage {
    pub text: String,
    /// Set when the message reports a failure instead of carrying the prompt
    pub is_error: bool,
}

impl PromptMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Ask the model to summarize a paper's abstract.
///
/// An unknown id yields an error message rather than an `Err`; transport and
/// parse failures still propagate.
pub async fn summarize_paper(service: &ArxivService, id: &str) -> Result<PromptMessage> {
    tracing::info!("Building summarize_paper prompt for {}", id);

    match service.find_entry(id).await {
        Ok(entry) => Ok(PromptMessage::user(format!(
            "Please summarize this paper abstract (ID: {}):\n\n{}",
            id,
            entry.summary().unwrap_or_default()
        ))),
        Err(ArxivError::NotFound(_)) => {
            tracing::warn!("summarize_paper: no paper found for {}", id);
            Ok(PromptMessage::error(format!("Error: Paper not found: {}", id)))
        }
        Err(e) => Err(e),
    }
}

/// Show the query built from the given fields. Never fails.
pub fn construct_search_query(fields: &QueryFields) -> PromptMessage {
    tracing::info!(
        "Building construct_search_query prompt: topic={:?}, author={:?}, category={:?}, year={:?}",
        fields.topic,
        fields.author,
        fields.category,
        fields.year
    );

    let query = build_search_query(fields);
    PromptMessage::user(format!(
        "Here is a constructed search query for the arXiv API based on your criteria:\n\n\
         `{}`\n\n\
         You can use this query with the `search_papers` tool.\n",
        query
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_search_query_all_fields() {
        let message = construct_search_query(
            &QueryFields::new()
                .topic("deep learning")
                .author("LeCun")
                .category("cs.AI")
                .year("2023"),
        );

        assert!(!message.is_error);
        assert!(message.text.contains(
            "`all:deep learning AND au:LeCun AND cat:cs.AI AND submittedDate:[202301010000 TO 202312312359]`"
        ));
        assert!(message.text.contains("`search_papers`"));
    }

    #[test]
    fn test_construct_search_query_partial() {
        let message = construct_search_query(&QueryFields::new().topic("transformers"));

        assert!(message.text.contains("`all:transformers`"));
        assert!(!message.text.contains("au:"));
        assert!(!message.text.contains("cat:"));
        assert!(!message.text.contains("submittedDate"));
    }

    #[test]
    fn test_construct_search_query_empty() {
        let message = construct_search_query(&QueryFields::new());
        assert!(message.text.contains("``"));
    }
}
