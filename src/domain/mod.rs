//! Domain types for the ckbscan explorer client.
//!
//! # Module Organization
//!
//! - [`error`] - explorer error type and API error codes
//! - [`network`] - network selection (Mainnet, Testnet, custom)
//! - [`search`] - query cleaning and resolved search results
//! - [`statistics`] - raw chart samples and chart points
//! - [`transaction`] - transactions, display cells and block rewards
//! - [`wire`] - JSON:API envelopes and lenient number decoding

pub mod error;
pub mod network;
pub mod search;
pub mod statistics;
pub mod transaction;
pub mod wire;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{ApiError, ExplorerError, HttpErrorCode};
pub use network::Network;
pub use search::{SearchQuery, SearchResult};
pub use statistics::{ChartPoint, ChartSeries, DifficultyPoint, HashRatePoint, StatisticsChart};
pub use transaction::{
    DisplayInput, DisplayOutput, Reward, TransactionRecord, block_rewards, confirmation,
};

// ============================================================================
// Address Transactions
// ============================================================================

/// One page of an address's transactions with the overall count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressTransactions {
    pub transactions: Vec<TransactionRecord>,
    pub total: u64,
}
