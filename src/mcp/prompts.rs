//! Prompt handlers bridging the prompt templates to pmcp.

use std::collections::HashMap;

use async_trait::async_trait;
use pmcp::types::{Content, GetPromptResult, PromptArgument, PromptInfo, PromptMessage, Role};
use pmcp::{Error, PromptHandler, RequestHandlerExtra};

use super::resources::to_pmcp_error;
use crate::models::QueryFields;
use crate::projector::{self, PromptMessage as Message};
use crate::service::ArxivService;

fn argument(name: &str, description: &str, required: bool) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        description: Some(description.to_string()),
        required,
        completion: None,
        arg_type: None,
    }
}

fn to_result(description: &str, message: Message) -> GetPromptResult {
    GetPromptResult {
        description: Some(if message.is_error {
            format!("{} (failed)", description)
        } else {
            description.to_string()
        }),
        messages: vec![PromptMessage {
            role: Role::User,
            content: Content::Text { text: message.text },
        }],
    }
}

/// `summarize_paper`
#[derive(Debug, Clone)]
pub struct SummarizePaperPrompt {
    pub service: ArxivService,
}

#[async_trait]
impl PromptHandler for SummarizePaperPrompt {
    async fn handle(
        &self,
        args: HashMap<String, String>,
        _extra: RequestHandlerExtra,
    ) -> Result<GetPromptResult, Error> {
        self.get_prompt(&args).await
    }

    fn metadata(&self) -> Option<PromptInfo> {
        Some(PromptInfo {
            name: "summarize_paper".to_string(),
            description: Some("Summarize the abstract of an arXiv paper".to_string()),
            arguments: Some(vec![argument("id", "arXiv identifier", true)]),
        })
    }
}

impl SummarizePaperPrompt {
    /// Build the prompt for `args["id"]`; an unknown paper yields an error message
    pub async fn get_prompt(&self, args: &HashMap<String, String>) -> Result<GetPromptResult, Error> {
        let id = args
            .get("id")
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| Error::invalid_params("Missing required argument 'id'"))?;

        let message = projector::summarize_paper(&self.service, id.trim())
            .await
            .map_err(to_pmcp_error)?;
        Ok(to_result("Summarize an arXiv paper", message))
    }
}

/// `construct_search_query`
#[derive(Debug, Clone, Default)]
pub struct ConstructSearchQueryPrompt;

#[async_trait]
impl PromptHandler for ConstructSearchQueryPrompt {
    async fn handle(
        &self,
        args: HashMap<String, String>,
        _extra: RequestHandlerExtra,
    ) -> Result<GetPromptResult, Error> {
        let fields = QueryFields {
            topic: args.get("topic").cloned(),
            author: args.get("author").cloned(),
            category: args.get("category").cloned(),
            year: args.get("year").cloned(),
        };

        Ok(to_result(
            "Construct an arXiv search query",
            projector::construct_search_query(&fields),
        ))
    }

    fn metadata(&self) -> Option<PromptInfo> {
        Some(PromptInfo {
            name: "construct_search_query".to_string(),
            description: Some(
                "Build an arXiv query string from topic, author, category and year".to_string(),
            ),
            arguments: Some(vec![
                argument("topic", "Free-text topic, searched in all fields", false),
                argument("author", "Author name", false),
                argument("category", "Category code, e.g. cs.AI", false),
                argument("year", "Submission year, e.g. 2023", false),
            ]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_result_user_role() {
        let result = to_result("desc", Message::user("text"));
        assert_eq!(result.description.as_deref(), Some("desc"));
        assert_eq!(result.messages.len(), 1);
        assert!(matches!(result.messages[0].role, Role::User));
        assert!(matches!(
            &result.messages[0].content,
            Content::Text { text, .. } if text == "text"
        ));
    }

    #[test]
    fn test_to_result_marks_errors() {
        let result = to_result("desc", Message::error("Error: Paper not found: x"));
        assert_eq!(result.description.as_deref(), Some("desc (failed)"));
    }

    #[test]
    fn test_prompt_metadata() {
        let info = ConstructSearchQueryPrompt.metadata().unwrap();
        assert_eq!(info.name, "construct_search_query");
        let args = info.arguments.unwrap();
        assert_eq!(args.len(), 4);
        assert!(args.iter().all(|a| !a.required));
    }
}
