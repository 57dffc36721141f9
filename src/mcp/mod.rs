//! MCP (Model Context Protocol) implementation.

mod prompts;
mod resources;
pub mod server;
mod tools;

pub use prompts::{ConstructSearchQueryPrompt, SummarizePaperPrompt};
pub use resources::ArxivResources;
pub use server::McpServer;
pub use tools::{
    GetPaperDetailsHandler, SearchPapersHandler, Tool, ToolError, ToolHandler, ToolRegistry,
};
