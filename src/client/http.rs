//! HTTP client abstraction for explorer API requests.

use reqwest::{Client, Url};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::time::Duration;

use crate::constants::JSON_API_MEDIA_TYPE;
use crate::domain::ExplorerError;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HttpConfig {
    /// Create config with custom timeout
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper with connection pooling.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::ClientInit` if the TLS backend is unavailable.
    pub fn with_config(config: HttpConfig) -> Result<Self, ExplorerError> {
        let inner = Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ExplorerError::client_init(e.to_string()))?;
        Ok(Self { inner, config })
    }

    /// Get the configuration
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Build a GET request carrying the JSON:API content negotiation headers.
    ///
    /// The explorer rejects requests whose `Content-Type` or `Accept` differ
    /// from `application/vnd.api+json` with 415 and 406 respectively.
    pub fn get(&self, url: Url) -> reqwest::RequestBuilder {
        self.inner
            .get(url)
            .header(CONTENT_TYPE, JSON_API_MEDIA_TYPE)
            .header(ACCEPT, JSON_API_MEDIA_TYPE)
            .timeout(self.config.timeout)
    }
}
