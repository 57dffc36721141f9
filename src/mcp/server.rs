//! MCP server implementation using pmcp (Pragmatic AI's rust-mcp-sdk).
//!
//! Exposes the arXiv tools, resources and prompts over stdio or streamable HTTP.

use crate::mcp::prompts::{ConstructSearchQueryPrompt, SummarizePaperPrompt};
use crate::mcp::resources::ArxivResources;
use crate::mcp::tools::{ToolError, ToolRegistry};
use crate::projector::ResourceProjector;
use crate::service::ArxivService;
use async_trait::async_trait;
use pmcp::{
    server::streamable_http_server::StreamableHttpServer, Error, RequestHandlerExtra, Server,
    ServerCapabilities, ToolHandler, ToolInfo,
};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Server name reported during initialization
pub const SERVER_NAME: &str = "arxiv-mcp";

/// The arXiv MCP server
///
/// Holds the built pmcp `Server` until a transport is chosen; both `run` and
/// `run_http` consume it.
#[derive(Debug)]
pub struct McpServer {
    server: Server,
}

impl McpServer {
    /// Create a new MCP server on top of the given service
    pub fn new(service: ArxivService) -> Result<Self, pmcp::Error> {
        let tools = ToolRegistry::new(&service);
        let server = Self::build_server_impl(service, tools)?;
        Ok(Self { server })
    }

    fn build_server_impl(service: ArxivService, tools: ToolRegistry) -> Result<Server, pmcp::Error> {
        let mut builder = Server::builder()
            .name(SERVER_NAME)
            .version(env!("CARGO_PKG_VERSION"))
            .capabilities(ServerCapabilities::default());

        for tool in tools.all() {
            let tool_handler = ToolWrapper {
                name: tool.name.clone(),
                description: Some(tool.description.clone()),
                input_schema: tool.input_schema.clone(),
                handler: tool.handler.clone(),
            };
            builder = builder.tool(tool_handler.name.clone(), tool_handler);
        }

        builder = builder
            .prompt(
                "summarize_paper",
                SummarizePaperPrompt {
                    service: service.clone(),
                },
            )
            .prompt("construct_search_query", ConstructSearchQueryPrompt)
            .resources(ArxivResources::new(ResourceProjector::new(service)));

        builder.build()
    }

    /// Run the server in stdio mode until the client disconnects
    pub async fn run(self) -> Result<(), pmcp::Error> {
        tracing::info!("Starting MCP server in stdio mode");
        self.server.run_stdio().await
    }

    /// Run the server over streamable HTTP on `addr`
    pub async fn run_http(self, addr: &str) -> Result<(SocketAddr, JoinHandle<()>), pmcp::Error> {
        tracing::info!("Starting MCP server in HTTP mode on {}", addr);

        let socket_addr: SocketAddr = addr
            .parse()
            .map_err(|e| Error::invalid_params(format!("Invalid address: {}", e)))?;

        let http_server =
            StreamableHttpServer::new(socket_addr, Arc::new(Mutex::new(self.server)));
        http_server.start().await
    }
}

/// Wrapper for adapting our Tool to pmcp's ToolHandler
#[derive(Clone)]
struct ToolWrapper {
    name: String,
    description: Option<String>,
    input_schema: Value,
    handler: Arc<dyn crate::mcp::tools::ToolHandler>,
}

#[async_trait]
impl ToolHandler for ToolWrapper {
    async fn handle(&self, args: Value, _extra: RequestHandlerExtra) -> Result<Value, Error> {
        self.handler.execute(args).await.map_err(|e| {
            tracing::warn!("Tool {} failed: {}", self.name, e);
            match e {
                ToolError::InvalidParams(msg) => Error::invalid_params(msg),
                ToolError::Arxiv(err) => Error::internal(err.to_string()),
            }
        })
    }

    fn metadata(&self) -> Option<ToolInfo> {
        Some(ToolInfo::new(
            self.name.clone(),
            self.description.clone(),
            self.input_schema.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::MockSource;
    use std::time::Duration;

    fn server() -> McpServer {
        McpServer::new(ArxivService::from_source(Arc::new(MockSource::new()))).unwrap()
    }

    #[test]
    fn test_stdio_run_does_not_fail_at_startup() {
        // Own runtime so a blocked stdin reader cannot hold up shutdown
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .unwrap();

        let outcome = runtime.block_on(async {
            tokio::time::timeout(Duration::from_millis(500), server().run()).await
        });
        runtime.shutdown_background();

        // Still serving, or stdin was closed; a startup error is a failure
        if let Ok(Err(e)) = outcome {
            let message = e.to_string();
            assert!(
                !message.contains("Cannot unwrap"),
                "stdio server failed at startup: {}",
                message
            );
        }
    }

    #[tokio::test]
    async fn test_http_run_binds() {
        let (addr, handle) = server().run_http("127.0.0.1:0").await.unwrap();
        assert!(addr.ip().is_loopback());
        assert_ne!(addr.port(), 0);
        handle.abort();
    }

    #[tokio::test]
    async fn test_http_run_rejects_bad_address() {
        assert!(server().run_http("not an address").await.is_err());
    }
}
