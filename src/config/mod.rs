//! Configuration management.
//!
//! Settings come from built-in defaults overridden by `ARXIV_MCP_*` environment
//! variables. There is no configuration file.
//!
//! | Variable                 | Default                              |
//! |--------------------------|--------------------------------------|
//! | `ARXIV_MCP_API_URL`      | `http://export.arxiv.org/api/query`  |
//! | `ARXIV_MCP_PDF_URL`      | `https://arxiv.org/pdf`              |
//! | `ARXIV_MCP_TIMEOUT_SECS` | `30`                                 |
//! | `ARXIV_MCP_USER_AGENT`   | `arxiv-mcp/<version>`                |
//! | `ARXIV_MCP_MAX_RETRIES`  | `3` (attempts, first one included)   |

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::utils::DEFAULT_USER_AGENT;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "ARXIV_MCP";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// arXiv query endpoint
    pub api_url: String,

    /// Base URL PDFs are fetched from (`<pdf_url>/<id>`)
    pub pdf_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent to arxiv.org
    pub user_agent: String,

    /// Attempts per request before a transient failure is reported
    pub max_retries: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://export.arxiv.org/api/query".to_string(),
            pdf_url: "https://arxiv.org/pdf".to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_retries: 3,
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Load configuration from the process environment
pub fn load_config() -> Result<Config, config::ConfigError> {
    load_config_from(config::Environment::with_prefix(ENV_PREFIX))
}

/// Load configuration from a given environment source
pub fn load_config_from(environment: config::Environment) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(environment.try_parsing(true))
        .build()?;

    settings.try_deserialize()
}
