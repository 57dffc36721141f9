//! HTTP transport for the arXiv query API and PDF endpoint.

use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

use crate::config::Config;
use crate::models::SearchRequest;
use crate::sources::{PdfTransport, SearchTransport, SourceError};
use crate::utils::{api_retry_config, with_retry, HttpClient, RetryConfig};

/// arXiv search and PDF transport
#[derive(Debug, Clone)]
pub struct ArxivSource {
    client: Arc<HttpClient>,
    api_url: Url,
    pdf_url: String,
    retry: RetryConfig,
}

impl ArxivSource {
    /// Create a source from configuration
    pub fn new(config: &Config) -> Result<Self, SourceError> {
        let client = HttpClient::with_settings(&config.user_agent, config.timeout())?;
        Self::with_client(Arc::new(client), config)
    }

    /// Create with a custom HTTP client (for testing)
    pub fn with_client(client: Arc<HttpClient>, config: &Config) -> Result<Self, SourceError> {
        let api_url = Url::parse(&config.api_url).map_err(|e| {
            SourceError::InvalidRequest(format!("Invalid API URL '{}': {}", config.api_url, e))
        })?;

        Ok(Self {
            client,
            api_url,
            pdf_url: config.pdf_url.trim_end_matches('/').to_string(),
            retry: api_retry_config(config.max_retries),
        })
    }

    /// Override the retry policy
    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Query URL for a request. Unset parameters are left out.
    pub fn search_url(&self, request: &SearchRequest) -> Url {
        let mut url = self.api_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(query) = &request.search_query {
                pairs.append_pair("search_query", query);
            }
            if let Some(ids) = &request.id_list {
                pairs.append_pair("id_list", ids);
            }
            pairs.append_pair("start", &request.start.to_string());
            pairs.append_pair("max_results", &request.max_results.to_string());
            if let Some(sort_by) = request.sort_by {
                pairs.append_pair("sortBy", sort_by.as_str());
            }
            if let Some(sort_order) = request.sort_order {
                pairs.append_pair("sortOrder", sort_order.as_str());
            }
        }
        url
    }

    /// PDF URL for an identifier
    pub fn pdf_url(&self, id: &str) -> String {
        format!("{}/{}", self.pdf_url, id)
    }

    async fn get(&self, url: &str, accept: &'static str) -> Result<reqwest::Response, SourceError> {
        let client = Arc::clone(&self.client);

        with_retry(self.retry, || {
            let client = Arc::clone(&client);
            async move {
                let response = client
                    .client()
                    .get(url)
                    .header("Accept", accept)
                    .send()
                    .await?;

                let status = response.status();
                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    return Err(SourceError::RateLimit);
                }
                if !status.is_success() {
                    return Err(SourceError::Api {
                        status: status.as_u16(),
                    });
                }
                Ok(response)
            }
        })
        .await
    }
}

#[async_trait]
impl SearchTransport for ArxivSource {
    async fn search(&self, request: &SearchRequest) -> Result<String, SourceError> {
        let url = self.search_url(request);
        tracing::debug!("GET {}", url);

        let response = self.get(url.as_str(), "application/atom+xml").await?;
        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to read response: {}", e)))?;

        tracing::debug!("arXiv returned {} bytes", body.len());
        Ok(body)
    }
}

#[async_trait]
impl PdfTransport for ArxivSource {
    async fn fetch_pdf(&self, id: &str) -> Result<Vec<u8>, SourceError> {
        let url = self.pdf_url(id);
        tracing::debug!("GET {}", url);

        let response = self.get(&url, "application/pdf").await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to read PDF: {}", e)))?;

        if bytes.is_empty() {
            return Err(SourceError::InvalidResponse(format!("Empty PDF body for {}", id)));
        }
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SortBy, SortOrder};

    fn source() -> ArxivSource {
        ArxivSource::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_search_url_query_mode() {
        let request = SearchRequest::query("all:deep learning AND cat:cs.AI")
            .max_results(10)
            .sort_by(Some(SortBy::SubmittedDate))
            .sort_order(Some(SortOrder::Descending));

        let url = source().search_url(&request);
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert_eq!(url.path(), "/api/query");
        assert_eq!(
            pairs,
            vec![
                ("search_query".to_string(), "all:deep learning AND cat:cs.AI".to_string()),
                ("start".to_string(), "0".to_string()),
                ("max_results".to_string(), "10".to_string()),
                ("sortBy".to_string(), "submittedDate".to_string()),
                ("sortOrder".to_string(), "descending".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_url_id_list_mode_omits_unset_params() {
        let request = SearchRequest::id_list(["2601.05230", "2301.12345v2"]).max_results(2);
        let url = source().search_url(&request);

        let query = url.query().unwrap();
        assert!(query.contains("id_list=2601.05230%2C2301.12345v2"));
        assert!(!query.contains("search_query"));
        assert!(!query.contains("sortBy"));
        assert!(!query.contains("sortOrder"));
    }

    #[test]
    fn test_pdf_url() {
        assert_eq!(source().pdf_url("2601.05230v1"), "https://arxiv.org/pdf/2601.05230v1");

        let config = Config {
            pdf_url: "http://localhost:9000/pdf/".to_string(),
            ..Config::default()
        };
        let source = ArxivSource::new(&config).unwrap();
        assert_eq!(source.pdf_url("1234.5678"), "http://localhost:9000/pdf/1234.5678");
    }

    #[test]
    fn test_invalid_api_url_is_rejected() {
        let config = Config {
            api_url: "not a url".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            ArxivSource::new(&config),
            Err(SourceError::InvalidRequest(_))
        ));
    }
}
