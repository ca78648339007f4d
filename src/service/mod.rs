//! Request → normalize → dispatch operations.
//!
//! Each function performs at most one network call, never returns an error
//! and ends in either a dispatch, a notification or a navigation. None of
//! them retries or cancels; timeouts belong to the [`ExplorerApi`]
//! implementation.
//!
//! [`ExplorerApi`]: crate::client::ExplorerApi

pub mod address;
pub mod node;
pub mod search;
pub mod statistics;
pub mod transaction;

pub use address::get_transactions_by_address;
pub use node::{get_tip_block_number, init_node_version};
pub use search::handle_search;
pub use statistics::{get_statistics_chart, merge_statistics, normalize_statistics};
pub use transaction::get_transaction_by_hash;
