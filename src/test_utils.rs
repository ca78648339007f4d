//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting setup code across tests.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::client::ExplorerApi;
use crate::domain::{
    AddressTransactions, ChartPoint, DifficultyPoint, DisplayInput, DisplayOutput, ExplorerError,
    HashRatePoint, SearchResult, StatisticsChart, TransactionRecord,
};
use crate::state::{Navigator, Route};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct TransactionMother;

impl TransactionMother {
    /// A plain transaction in `block_number` with `outputs` output cells.
    #[must_use]
    pub fn with_outputs(block_number: u64, outputs: usize) -> TransactionRecord {
        TransactionRecord {
            transaction_hash: format!("0x{block_number:064x}"),
            block_number,
            block_timestamp: 1_557_482_351_075,
            transaction_fee: 1_000,
            version: 0,
            is_cellbase: false,
            display_inputs: vec![DisplayInput {
                input_id: Some(1),
                address_hash: Some("ckb1qyqsender".to_string()),
                capacity: 200_000_000_000,
                ..DisplayInput::default()
            }],
            display_outputs: (0..outputs)
                .map(|i| DisplayOutput {
                    output_id: Some(i as u64 + 1),
                    address_hash: Some(format!("ckb1qyqreceiver{i}")),
                    capacity: 100_000_000_000,
                    is_genesis_output: false,
                })
                .collect(),
        }
    }

    /// A cellbase transaction paying out the rewards of the block before it.
    #[must_use]
    pub fn cellbase(block_number: u64) -> TransactionRecord {
        TransactionRecord {
            is_cellbase: true,
            transaction_fee: 0,
            display_inputs: vec![DisplayInput {
                from_cellbase: true,
                target_block_number: Some(block_number.saturating_sub(1).max(1)),
                base_reward: Some(100_000_000_000),
                secondary_reward: Some(6_000_000_000),
                commit_reward: Some(0),
                proposal_reward: Some(0),
                ..DisplayInput::default()
            }],
            ..Self::with_outputs(block_number, 1)
        }
    }
}

pub struct StatisticsMother;

impl StatisticsMother {
    /// Hash-rate sample; `rate` is written the way the API sends it.
    #[must_use]
    pub fn hash_rate(block_number: u64, rate: &str) -> HashRatePoint {
        HashRatePoint {
            block_number,
            hash_rate: rate.parse().unwrap(),
        }
    }

    #[must_use]
    pub fn difficulty(block_number: u64, difficulty: u64, epoch_number: u64) -> DifficultyPoint {
        DifficultyPoint {
            block_number,
            difficulty,
            epoch_number,
        }
    }

    /// One matched sample at block 100.
    #[must_use]
    pub fn chart() -> StatisticsChart {
        StatisticsChart {
            hash_rate: Some(vec![Self::hash_rate(100, "0.001")]),
            difficulty: Some(vec![Self::difficulty(100, 500, 2)]),
        }
    }

    /// Normalized form of [`Self::chart`].
    #[must_use]
    pub fn chart_points() -> Vec<ChartPoint> {
        vec![
            ChartPoint::HashRate {
                block_number: 100,
                hash_rate: 1,
            },
            ChartPoint::Difficulty {
                block_number: 100,
                difficulty: 500,
            },
            ChartPoint::EpochNumber {
                block_number: 100,
                epoch_number: 2,
            },
        ]
    }
}

// ============================================================================
// Mock Explorer
// ============================================================================

type Scripted<T> = RefCell<Option<Result<T, ExplorerError>>>;

/// [`ExplorerApi`] with one scripted response per operation.
///
/// Each response is handed out once; unscripted or repeated calls fail with
/// a parse error. Calls are counted so tests can assert on request counts.
#[derive(Default)]
pub struct MockExplorer {
    search: Scripted<SearchResult>,
    statistics: Scripted<StatisticsChart>,
    transaction: Scripted<Option<TransactionRecord>>,
    address: Scripted<AddressTransactions>,
    node_version: Scripted<String>,
    tip: Scripted<u64>,
    searched: RefCell<Vec<String>>,
    address_requests: RefCell<Vec<(String, u32, u32)>>,
    transaction_calls: Cell<usize>,
}

impl MockExplorer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(self, response: Result<SearchResult, ExplorerError>) -> Self {
        *self.search.borrow_mut() = Some(response);
        self
    }

    #[must_use]
    pub fn with_statistics(self, response: Result<StatisticsChart, ExplorerError>) -> Self {
        *self.statistics.borrow_mut() = Some(response);
        self
    }

    #[must_use]
    pub fn with_transaction(
        self,
        response: Result<Option<TransactionRecord>, ExplorerError>,
    ) -> Self {
        *self.transaction.borrow_mut() = Some(response);
        self
    }

    #[must_use]
    pub fn with_address(self, response: Result<AddressTransactions, ExplorerError>) -> Self {
        *self.address.borrow_mut() = Some(response);
        self
    }

    #[must_use]
    pub fn with_node_version(self, response: Result<String, ExplorerError>) -> Self {
        *self.node_version.borrow_mut() = Some(response);
        self
    }

    #[must_use]
    pub fn with_tip(self, response: Result<u64, ExplorerError>) -> Self {
        *self.tip.borrow_mut() = Some(response);
        self
    }

    pub fn search_calls(&self) -> usize {
        self.searched.borrow().len()
    }

    pub fn searched_queries(&self) -> Vec<String> {
        self.searched.borrow().clone()
    }

    pub fn transaction_calls(&self) -> usize {
        self.transaction_calls.get()
    }

    pub fn address_requests(&self) -> Vec<(String, u32, u32)> {
        self.address_requests.borrow().clone()
    }

    fn take<T>(slot: &Scripted<T>, operation: &str) -> Result<T, ExplorerError> {
        slot.take()
            .unwrap_or_else(|| Err(ExplorerError::parse(format!("unscripted {operation}"))))
    }
}

impl ExplorerApi for MockExplorer {
    async fn fetch_search_result(&self, query: &str) -> Result<SearchResult, ExplorerError> {
        self.searched.borrow_mut().push(query.to_string());
        Self::take(&self.search, "search")
    }

    async fn fetch_statistics_chart(&self) -> Result<StatisticsChart, ExplorerError> {
        Self::take(&self.statistics, "statistics")
    }

    async fn fetch_transaction_by_hash(
        &self,
        _hash: &str,
    ) -> Result<Option<TransactionRecord>, ExplorerError> {
        self.transaction_calls.set(self.transaction_calls.get() + 1);
        Self::take(&self.transaction, "transaction")
    }

    async fn fetch_transactions_by_address(
        &self,
        hash: &str,
        page: u32,
        size: u32,
    ) -> Result<AddressTransactions, ExplorerError> {
        self.address_requests
            .borrow_mut()
            .push((hash.to_string(), page, size));
        Self::take(&self.address, "address")
    }

    async fn fetch_node_version(&self) -> Result<String, ExplorerError> {
        Self::take(&self.node_version, "node version")
    }

    async fn fetch_tip_block_number(&self) -> Result<u64, ExplorerError> {
        Self::take(&self.tip, "tip block number")
    }
}

// ============================================================================
// Recording Navigator
// ============================================================================

/// [`Navigator`] that records every call instead of keeping a stack.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub pushes: Vec<Route>,
    pub replaces: Vec<Route>,
}

impl Navigator for RecordingNavigator {
    fn push(&mut self, route: Route) {
        self.pushes.push(route);
    }

    fn replace(&mut self, route: Route) {
        self.replaces.push(route);
    }
}

// ============================================================================
// Filesystem
// ============================================================================

/// A not-yet-created directory under the system temp dir, unique per call.
#[must_use]
pub fn scratch_dir(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    std::env::temp_dir().join(format!("ckbscan-{name}-{}-{nanos}", std::process::id()))
}
