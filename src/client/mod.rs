//! HTTP clients for the CKB explorer API.
//!
//! [`ExplorerApi`] is the fetch contract the services consume;
//! [`ExplorerClient`] implements it over reqwest.
//!
//! # Example
//!
//! ```ignore
//! use ckbscan::client::{ExplorerApi, ExplorerClient, HttpConfig};
//! use ckbscan::domain::Network;
//!
//! let client = ExplorerClient::new(&Network::Mainnet, HttpConfig::default())?;
//! let result = client.fetch_search_result("0x3b13...").await?;
//! ```

pub mod explorer;
pub mod http;

// ============================================================================
// Re-exports
// ============================================================================

pub use explorer::ExplorerClient;
pub use http::{HttpClient, HttpConfig};

use crate::domain::{
    AddressTransactions, ExplorerError, SearchResult, StatisticsChart, TransactionRecord,
};

// ============================================================================
// Fetch Contract
// ============================================================================

/// Typed REST calls against an explorer API.
///
/// Failures carry the API's structured error list where one was returned
/// (see [`ExplorerError::Api`]). Timeouts are the implementation's concern.
#[allow(async_fn_in_trait)]
pub trait ExplorerApi {
    /// Resolves a cleaned query to the entity it names.
    async fn fetch_search_result(&self, query: &str) -> Result<SearchResult, ExplorerError>;

    /// Fetches the hash-rate and difficulty series.
    async fn fetch_statistics_chart(&self) -> Result<StatisticsChart, ExplorerError>;

    /// Fetches a transaction; `Ok(None)` when the API has no such record.
    async fn fetch_transaction_by_hash(
        &self,
        hash: &str,
    ) -> Result<Option<TransactionRecord>, ExplorerError>;

    /// Fetches one page of an address's transactions.
    async fn fetch_transactions_by_address(
        &self,
        hash: &str,
        page: u32,
        size: u32,
    ) -> Result<AddressTransactions, ExplorerError>;

    /// Fetches the version string of the node backing the explorer.
    async fn fetch_node_version(&self) -> Result<String, ExplorerError>;

    /// Fetches the current tip block number.
    async fn fetch_tip_block_number(&self) -> Result<u64, ExplorerError>;
}
