//! Tool registry and handlers for MCP tools.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ArxivError;
use crate::models::{SearchRequest, SortBy, SortOrder};
use crate::service::ArxivService;

/// An MCP tool that can be called by the client
#[derive(Clone)]
pub struct Tool {
    /// Tool name (e.g., "search_papers")
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// JSON Schema for input parameters
    pub input_schema: Value,

    /// Handler function to execute the tool
    pub handler: Arc<dyn ToolHandler>,
}

impl std::fmt::Debug for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("input_schema", &self.input_schema)
            .finish()
    }
}

/// Why a tool call failed
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Arguments missing or of the wrong shape
    #[error("Invalid arguments: {0}")]
    InvalidParams(String),

    #[error(transparent)]
    Arxiv(#[from] ArxivError),
}

/// Handler for executing a tool
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync + std::fmt::Debug {
    /// Execute the tool with the given arguments
    async fn execute(&self, args: Value) -> Result<Value, ToolError>;
}

fn parse_args<T: serde::de::DeserializeOwned>(args: Value) -> Result<T, ToolError> {
    // Hosts may send no arguments object at all
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };
    serde_json::from_value(args).map_err(|e| ToolError::InvalidParams(e.to_string()))
}

fn feed_to_value<T: serde::Serialize>(value: &T, target: &str) -> Result<Value, ToolError> {
    serde_json::to_value(value).map_err(|source| {
        ToolError::Arxiv(ArxivError::Serialization {
            id: target.to_string(),
            source,
        })
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchPapersArgs {
    query: String,

    #[serde(default, alias = "max_results")]
    max_results: Option<usize>,

    #[serde(default)]
    start: Option<usize>,

    #[serde(default, alias = "sort_by")]
    sort_by: Option<SortBy>,

    #[serde(default, alias = "sort_order")]
    sort_order: Option<SortOrder>,
}

/// `search_papers`: free-text arXiv search
#[derive(Debug)]
pub struct SearchPapersHandler {
    pub service: ArxivService,
}

#[async_trait::async_trait]
impl ToolHandler for SearchPapersHandler {
    async fn execute(&self, args: Value) -> Result<Value, ToolError> {
        let args: SearchPapersArgs = parse_args(args)?;
        tracing::info!(
            "search_papers called with query: {}, maxResults: {:?}, sortBy: {:?}, sortOrder: {:?}",
            args.query,
            args.max_results,
            args.sort_by,
            args.sort_order
        );

        let request = SearchRequest::query(&args.query)
            .start(args.start.unwrap_or(0))
            .max_results(args.max_results.unwrap_or(0))
            .sort_by(args.sort_by)
            .sort_order(args.sort_order);

        let feed = self.service.search(request).await?;
        feed_to_value(&feed, &args.query)
    }
}

#[derive(Debug, Deserialize)]
struct GetPaperDetailsArgs {
    ids: Vec<String>,
}

/// `get_paper_details`: direct lookup by identifiers
#[derive(Debug)]
pub struct GetPaperDetailsHandler {
    pub service: ArxivService,
}

#[async_trait::async_trait]
impl ToolHandler for GetPaperDetailsHandler {
    async fn execute(&self, args: Value) -> Result<Value, ToolError> {
        let args: GetPaperDetailsArgs = parse_args(args)?;
        tracing::info!("get_paper_details called with ids: {:?}", args.ids);

        if args.ids.is_empty() {
            return Err(ToolError::InvalidParams(
                "'ids' must contain at least one identifier".to_string(),
            ));
        }

        let feed = self.service.get_papers(&args.ids).await?;
        feed_to_value(&feed, &args.ids.join(","))
    }
}

/// Registry for all MCP tools
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: HashMap<String, Tool>,
}

impl ToolRegistry {
    /// Create a registry holding the arXiv tools
    pub fn new(service: &ArxivService) -> Self {
        let mut registry = Self {
            tools: HashMap::new(),
        };

        registry.register(Tool {
            name: "search_papers".to_string(),
            description: "Search for papers on arXiv".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "arXiv search query, e.g. 'all:electron AND cat:hep-ph'"
                    },
                    "maxResults": {
                        "type": "integer",
                        "description": "Maximum number of results (0 or omitted means 5)",
                        "minimum": 0
                    },
                    "start": {
                        "type": "integer",
                        "description": "Index of the first result",
                        "minimum": 0
                    },
                    "sortBy": {
                        "type": "string",
                        "enum": ["relevance", "lastUpdatedDate", "submittedDate"]
                    },
                    "sortOrder": {
                        "type": "string",
                        "enum": ["ascending", "descending"]
                    }
                },
                "required": ["query"]
            }),
            handler: Arc::new(SearchPapersHandler {
                service: service.clone(),
            }),
        });

        registry.register(Tool {
            name: "get_paper_details".to_string(),
            description: "Get details for specific arXiv papers by ID".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "ids": {
                        "type": "array",
                        "description": "arXiv identifiers, e.g. ['2601.05230', '2301.12345v2']",
                        "items": { "type": "string" },
                        "minItems": 1
                    }
                },
                "required": ["ids"]
            }),
            handler: Arc::new(GetPaperDetailsHandler {
                service: service.clone(),
            }),
        });

        registry
    }

    /// Register a tool
    pub fn register(&mut self, tool: Tool) {
        self.tools.insert(tool.name.clone(), tool);
    }

    /// Get all tools
    pub fn all(&self) -> Vec<&Tool> {
        self.tools.values().collect()
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.get(name)
    }

    /// Execute a tool by name
    pub async fn execute(&self, name: &str, args: Value) -> Result<Value, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::InvalidParams(format!("Tool '{}' not found", name)))?;

        tool.handler.execute(args).await
    }
}
