//! Application state: tagged actions, the dispatch sink and the store.
//!
//! Services never mutate state directly. They emit [`AppAction`]s into a
//! [`Dispatch`] sink and navigate through a [`Navigator`]; [`AppState`] is
//! the reducer-backed sink the binary uses.
//!
//! ```text
//! ┌──────────────┐   AppAction   ┌──────────────┐
//! │   service    │ ────────────▶ │   AppState   │
//! │  functions   │     Route     ├──────────────┤
//! │              │ ────────────▶ │   History    │
//! └──────────────┘               └──────────────┘
//! ```

use crate::domain::{ChartPoint, TransactionRecord};

pub mod navigation;

pub use navigation::{History, Navigator, Route};

// ============================================================================
// Actions
// ============================================================================

/// Tagged state updates emitted by the services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Show a transient notification.
    ShowToastMessage { message: String },
    /// Toggle the header search bar's editable mode.
    UpdateHeaderSearchEditable { editable: bool },
    /// Replace the statistics chart points.
    UpdateStatisticsChartData { points: Vec<ChartPoint> },
    /// Replace the transaction shown in the detail view.
    UpdateTransaction { transaction: Box<TransactionRecord> },
    /// Replace the current page of address transactions.
    UpdateAddressTransactions {
        transactions: Vec<TransactionRecord>,
    },
    /// Replace the address transaction count.
    UpdateAddressTotal { total: u64 },
    UpdateNodeVersion { version: String },
    UpdateTipBlockNumber { tip_block_number: u64 },
}

impl AppAction {
    /// Stable tag for logging.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::ShowToastMessage { .. } => "ShowToastMessage",
            Self::UpdateHeaderSearchEditable { .. } => "UpdateHeaderSearchEditable",
            Self::UpdateStatisticsChartData { .. } => "UpdateStatisticsChartData",
            Self::UpdateTransaction { .. } => "UpdateTransaction",
            Self::UpdateAddressTransactions { .. } => "UpdateAddressTransactions",
            Self::UpdateAddressTotal { .. } => "UpdateAddressTotal",
            Self::UpdateNodeVersion { .. } => "UpdateNodeVersion",
            Self::UpdateTipBlockNumber { .. } => "UpdateTipBlockNumber",
        }
    }
}

// ============================================================================
// Dispatch Sink
// ============================================================================

/// Accepts actions emitted by the services.
pub trait Dispatch {
    fn dispatch(&mut self, action: AppAction);
}

/// Recording sink, useful for inspecting what a service emitted.
impl Dispatch for Vec<AppAction> {
    fn dispatch(&mut self, action: AppAction) {
        self.push(action);
    }
}

// ============================================================================
// Search Input
// ============================================================================

/// The search box's displayed text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    pub value: String,
}

impl SearchInput {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

// ============================================================================
// Store
// ============================================================================

/// Reducer-backed application store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    // === App ===
    /// Most recent toast notification.
    pub toast_message: Option<String>,
    pub node_version: String,
    pub tip_block_number: u64,

    // === Components ===
    pub search_bar_editable: bool,

    // === Pages ===
    pub transaction: TransactionRecord,
    pub address_transactions: Vec<TransactionRecord>,
    pub address_total: u64,
    pub statistics_chart_datas: Vec<ChartPoint>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one action to the store.
    pub fn reduce(&mut self, action: AppAction) {
        match action {
            AppAction::ShowToastMessage { message } => self.toast_message = Some(message),
            AppAction::UpdateHeaderSearchEditable { editable } => {
                self.search_bar_editable = editable;
            }
            AppAction::UpdateStatisticsChartData { points } => {
                self.statistics_chart_datas = points;
            }
            AppAction::UpdateTransaction { transaction } => self.transaction = *transaction,
            AppAction::UpdateAddressTransactions { transactions } => {
                self.address_transactions = transactions;
            }
            AppAction::UpdateAddressTotal { total } => self.address_total = total,
            AppAction::UpdateNodeVersion { version } => self.node_version = version,
            AppAction::UpdateTipBlockNumber { tip_block_number } => {
                self.tip_block_number = tip_block_number;
            }
        }
    }
}

impl Dispatch for AppState {
    fn dispatch(&mut self, action: AppAction) {
        tracing::debug!("dispatch {}", action.tag());
        self.reduce(action);
    }
}

// ============================================================================
// Tests
// ============================================================================
