use std::time::Duration;

use crate::rate_limit::RateLimiter;
use crate::retry::RetryConfig;

/// Default NCBI E-utilities base URL
const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// NCBI rate limit without an API key (requests per second)
const DEFAULT_RATE_LIMIT: f64 = 3.0;

/// NCBI rate limit with an API key (requests per second)
const API_KEY_RATE_LIMIT: f64 = 10.0;

/// Configuration for the PubMed client
///
/// NCBI asks callers to identify themselves with a tool name and contact
/// email, and grants a higher rate limit (10 requests/second instead of 3)
/// when an API key is supplied.
///
/// # Example
///
/// ```
/// use pharma_papers_rs::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_api_key("your_api_key")
///     .with_email("researcher@example.com")
///     .with_tool("get-papers-list");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// NCBI API key, if any
    pub api_key: Option<String>,
    /// Contact email reported to NCBI
    pub email: Option<String>,
    /// Tool name reported to NCBI
    pub tool: Option<String>,
    /// Custom rate limit override (requests per second)
    pub rate_limit: Option<f64>,
    /// Custom base URL (used by tests to point at a mock server)
    pub base_url: Option<String>,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Retry policy for transient API failures
    pub retry_config: RetryConfig,
}

impl ClientConfig {
    /// Create a new configuration with NCBI defaults
    pub fn new() -> Self {
        Self {
            api_key: None,
            email: None,
            tool: None,
            rate_limit: None,
            base_url: None,
            timeout: Duration::from_secs(30),
            retry_config: RetryConfig::default(),
        }
    }

    /// Set the NCBI API key (raises the default rate limit to 10 req/s)
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the contact email sent with every request
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the tool name sent with every request
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = Some(tool.into());
        self
    }

    /// Override the rate limit (requests per second)
    pub fn with_rate_limit(mut self, requests_per_second: f64) -> Self {
        self.rate_limit = Some(requests_per_second);
        self
    }

    /// Override the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the HTTP request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Effective rate limit: explicit override, else 10 req/s with an API
    /// key, else the NCBI default of 3 req/s
    pub fn effective_rate_limit(&self) -> f64 {
        if let Some(rate) = self.rate_limit {
            rate
        } else if self.api_key.is_some() {
            API_KEY_RATE_LIMIT
        } else {
            DEFAULT_RATE_LIMIT
        }
    }

    /// Effective base URL (custom override or the NCBI E-utilities URL)
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Effective tool name reported to NCBI
    pub fn effective_tool(&self) -> &str {
        self.tool.as_deref().unwrap_or(env!("CARGO_PKG_NAME"))
    }

    /// User agent string for HTTP requests
    pub fn effective_user_agent(&self) -> String {
        format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    /// Build the identification parameters appended to every API request
    pub fn build_api_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(api_key) = &self.api_key {
            params.push(("api_key".to_string(), api_key.clone()));
        }
        if let Some(email) = &self.email {
            params.push(("email".to_string(), email.clone()));
        }
        params.push(("tool".to_string(), self.effective_tool().to_string()));
        params
    }

    /// Create a rate limiter matching this configuration
    pub fn create_rate_limiter(&self) -> RateLimiter {
        RateLimiter::new(self.effective_rate_limit())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
