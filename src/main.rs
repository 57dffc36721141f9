use anyhow::Result;
use arxiv_mcp::config::load_config;
use arxiv_mcp::mcp::server::McpServer;
use arxiv_mcp::service::ArxivService;
use arxiv_mcp::sources::ArxivSource;
use clap::{Parser, Subcommand, ValueEnum};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// arXiv MCP - search arXiv and read papers from MCP clients
#[derive(Parser, Debug)]
#[command(name = "arxiv-mcp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Model Context Protocol server for the arXiv API", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (-v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Log line format
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the MCP server (default when no command is given)
    Serve {
        /// Serve over streamable HTTP instead of stdio
        #[arg(long)]
        http: bool,

        /// Port for HTTP mode
        #[arg(long, short, default_value_t = 3000)]
        port: u16,

        /// Host to bind to for HTTP mode
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

fn init_tracing(cli: &Cli) {
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = if cli.quiet { "error" } else { log_level };

    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("arxiv_mcp={}", env_filter)),
    );

    // stdout carries the stdio protocol, so logs go to stderr
    let registry = tracing_subscriber::registry().with(filter);
    match cli.log_format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = load_config()?;
    tracing::debug!("Loaded configuration: {:?}", config);

    let source = Arc::new(ArxivSource::new(&config)?);
    let service = ArxivService::from_source(source);

    let command = cli.command.unwrap_or(Commands::Serve {
        http: false,
        port: 3000,
        host: "127.0.0.1".to_string(),
    });

    match command {
        Commands::Serve {
            http,
            port,
            host,
        } => {
            let server = McpServer::new(service)?;

            if http {
                let addr = format!("{}:{}", host, port);
                let (bound_addr, handle) = server.run_http(&addr).await?;
                tracing::info!("MCP server listening on {}", bound_addr);

                handle
                    .await
                    .map_err(|e| anyhow::anyhow!("Server task failed: {}", e))?;
            } else {
                server.run().await?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_command() {
        let cli = Cli::parse_from(["arxiv-mcp"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn test_cli_verbose_count() {
        let cli = Cli::parse_from(["arxiv-mcp", "-vv", "serve"]);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_serve_command() {
        let cli = Cli::parse_from(["arxiv-mcp", "serve"]);
        match &cli.command {
            Some(Commands::Serve {
                http,
                port,
                host,
            }) => {
                assert!(!*http);
                assert_eq!(*port, 3000);
                assert_eq!(host, "127.0.0.1");
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_serve_http_mode() {
        let cli = Cli::parse_from([
            "arxiv-mcp",
            "serve",
            "--http",
            "--port",
            "8080",
            "--log-format",
            "json",
        ]);
        assert_eq!(cli.log_format, LogFormat::Json);
        match &cli.command {
            Some(Commands::Serve { http, port, .. }) => {
                assert!(*http);
                assert_eq!(*port, 8080);
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_serve_has_no_stdio_flag() {
        let result = Cli::try_parse_from(["arxiv-mcp", "serve", "--stdio"]);
        assert!(result.is_err());
    }
}
