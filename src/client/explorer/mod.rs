//! Explorer API client.
//!
//! Endpoint methods live in the submodules, one per resource; this module
//! owns request plumbing, error body decoding and the [`ExplorerApi`] impl.

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ExplorerApi;
use super::http::{HttpClient, HttpConfig};
use crate::domain::wire::Document;
use crate::domain::{
    AddressTransactions, ApiError, ExplorerError, Network, SearchResult, StatisticsChart,
    TransactionRecord,
};

mod node;
mod search;
mod statistics;
mod transactions;


// ============================================================================
// Explorer Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct ExplorerClient {
    /// API base URL, without a trailing slash.
    base_url: Url,
    http: HttpClient,
}

impl ExplorerClient {
    /// Creates a client for the given network.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::ClientInit` if the HTTP client fails to initialize.
    pub fn new(network: &Network, config: HttpConfig) -> Result<Self, ExplorerError> {
        Self::with_base_url(network.api_url(), config)
    }

    /// Creates a client against an arbitrary API base URL.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::ClientInit` if the URL is not an absolute
    /// hierarchical URL or the HTTP client fails to initialize.
    pub fn with_base_url(
        base_url: impl Into<String>,
        config: HttpConfig,
    ) -> Result<Self, ExplorerError> {
        let raw = base_url.into();
        let base_url = Url::parse(raw.trim_end_matches('/'))
            .map_err(|e| ExplorerError::client_init(format!("Invalid API URL '{raw}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ExplorerError::client_init(format!(
                "Invalid API URL '{raw}': no path"
            )));
        }
        Ok(Self {
            base_url,
            http: HttpClient::with_config(config)?,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    ///
    /// A `/`, `?` or `#` inside a segment stays part of that segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ExplorerError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ExplorerError::client_init(format!("{} has no path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a GET request and decodes a JSON:API document.
    ///
    /// Non-success statuses become [`ExplorerError::Api`] with whatever error
    /// objects the body carried.
    pub(crate) async fn get_document<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<Document<T>, ExplorerError> {
        let url = self.endpoint(segments)?;
        tracing::debug!("GET {url}");

        let response = self.http.get(url.clone()).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let errors = decode_error_body(&body);
            tracing::debug!("GET {url} returned {status} with {} error(s)", errors.len());
            return Err(ExplorerError::Api {
                status: status.as_u16(),
                errors,
            });
        }

        response
            .json::<Document<T>>()
            .await
            .map_err(|e| ExplorerError::parse(format!("Failed to decode {}: {e}", url.path())))
    }
}

/// Returns `true` for the status the explorer uses for unknown records.
pub(crate) fn is_not_found(err: &ExplorerError) -> bool {
    matches!(err, ExplorerError::Api { status, .. } if *status == StatusCode::NOT_FOUND.as_u16())
}

/// Extracts structured error objects from an error response body.
///
/// Accepts `{"message": ..., "errors": [...]}` or a bare array. Anything
/// else yields an empty list.
#[must_use]
pub fn decode_error_body(body: &[u8]) -> Vec<ApiError> {
    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return Vec::new();
    };

    let list = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("errors") {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    list.into_iter()
        .filter_map(|item| serde_json::from_value::<ApiError>(item).ok())
        .collect()
}

// ============================================================================
// Fetch Contract
// ============================================================================

impl ExplorerApi for ExplorerClient {
    async fn fetch_search_result(&self, query: &str) -> Result<SearchResult, ExplorerError> {
        self.search(query).await
    }

    async fn fetch_statistics_chart(&self) -> Result<StatisticsChart, ExplorerError> {
        self.statistics_chart().await
    }

    async fn fetch_transaction_by_hash(
        &self,
        hash: &str,
    ) -> Result<Option<TransactionRecord>, ExplorerError> {
        self.transaction_by_hash(hash).await
    }

    async fn fetch_transactions_by_address(
        &self,
        hash: &str,
        page: u32,
        size: u32,
    ) -> Result<AddressTransactions, ExplorerError> {
        self.address_transactions(hash, page, size).await
    }

    async fn fetch_node_version(&self) -> Result<String, ExplorerError> {
        self.node_version().await
    }

    async fn fetch_tip_block_number(&self) -> Result<u64, ExplorerError> {
        self.tip_block_number().await
    }
}
