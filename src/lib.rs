//! # arXiv MCP
//!
//! A Model Context Protocol (MCP) server for searching arXiv and reading
//! individual papers.
//!
//! ## Architecture
//!
//! - [`models`]: Feed data model and search request types
//! - [`atom`]: Atom feed parser
//! - [`query`]: Structured query construction
//! - [`sources`]: HTTP transports for the arXiv API and PDF host
//! - [`service`]: Search orchestration on top of a transport
//! - [`projector`]: Resource views and prompt templates
//! - [`mcp`]: MCP protocol surface and server
//! - [`utils`]: HTTP client and retry helpers
//! - [`config`]: Environment-based configuration

pub mod atom;
pub mod config;
pub mod error;
pub mod mcp;
pub mod models;
pub mod projector;
pub mod query;
pub mod service;
pub mod sources;
pub mod utils;

// Re-export commonly used types
pub use error::{ArxivError, Result};
pub use models::{Entry, Feed, SearchRequest};
pub use service::ArxivService;
pub use sources::{ArxivSource, MockSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
