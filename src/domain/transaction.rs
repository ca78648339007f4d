//! Transaction types as served by the explorer's transaction endpoint.

use serde::{Deserialize, Serialize};

use super::wire::{option_u64_lenient, u64_lenient};
use crate::constants::{
    BASE_REWARD_LABEL, COMMIT_REWARD_LABEL, PROPOSAL_REWARD_LABEL, SECONDARY_REWARD_LABEL,
};

// ============================================================================
// Cells
// ============================================================================

/// An input cell in its display form.
///
/// Cellbase inputs carry the reward breakdown for the block they pay out.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayInput {
    #[serde(default, deserialize_with = "option_u64_lenient")]
    pub input_id: Option<u64>,
    #[serde(default)]
    pub address_hash: Option<String>,
    #[serde(default, deserialize_with = "u64_lenient")]
    pub capacity: u64,
    #[serde(default)]
    pub from_cellbase: bool,
    #[serde(default, deserialize_with = "option_u64_lenient")]
    pub target_block_number: Option<u64>,
    #[serde(default, deserialize_with = "option_u64_lenient")]
    pub base_reward: Option<u64>,
    #[serde(default, deserialize_with = "option_u64_lenient")]
    pub secondary_reward: Option<u64>,
    #[serde(default, deserialize_with = "option_u64_lenient")]
    pub commit_reward: Option<u64>,
    #[serde(default, deserialize_with = "option_u64_lenient")]
    pub proposal_reward: Option<u64>,
}

/// An output cell in its display form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayOutput {
    #[serde(default, deserialize_with = "option_u64_lenient")]
    pub output_id: Option<u64>,
    #[serde(default)]
    pub address_hash: Option<String>,
    #[serde(default, deserialize_with = "u64_lenient")]
    pub capacity: u64,
    /// Set on the first output of a genesis-block transaction when loaded.
    #[serde(default)]
    pub is_genesis_output: bool,
}

// ============================================================================
// Transaction Record
// ============================================================================

/// A transaction with its display cells.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(default)]
    pub transaction_hash: String,
    #[serde(deserialize_with = "u64_lenient")]
    pub block_number: u64,
    /// Milliseconds since the Unix epoch.
    #[serde(default, deserialize_with = "u64_lenient")]
    pub block_timestamp: u64,
    /// Fee in shannons.
    #[serde(default, deserialize_with = "u64_lenient")]
    pub transaction_fee: u64,
    #[serde(default, deserialize_with = "u64_lenient")]
    pub version: u64,
    #[serde(default)]
    pub is_cellbase: bool,
    #[serde(default)]
    pub display_inputs: Vec<DisplayInput>,
    #[serde(default)]
    pub display_outputs: Vec<DisplayOutput>,
}

impl TransactionRecord {
    /// Returns the record with the first output's genesis flag derived from
    /// the block number. Records without outputs are returned unchanged.
    #[must_use]
    pub fn annotate_genesis(mut self) -> Self {
        let is_genesis = self.block_number == 0;
        if let Some(first) = self.display_outputs.first_mut() {
            first.is_genesis_output = is_genesis;
        }
        self
    }
}

// ============================================================================
// Block Rewards
// ============================================================================

/// One row of a cellbase reward breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    pub name: &'static str,
    /// Amount in shannons.
    pub capacity: u64,
}

/// Reward rows to show for a cellbase input.
///
/// Rewards only appear on cellbase transactions past the genesis block
/// whose input targets a real block; early blocks pay no reward.
#[must_use]
pub fn block_rewards(transaction: &TransactionRecord, cell: &DisplayInput) -> Option<[Reward; 4]> {
    let show = transaction.block_number > 0
        && transaction.is_cellbase
        && cell.target_block_number.unwrap_or(0) > 0;
    if !show {
        return None;
    }

    Some([
        Reward {
            name: BASE_REWARD_LABEL,
            capacity: cell.base_reward.unwrap_or(0),
        },
        Reward {
            name: SECONDARY_REWARD_LABEL,
            capacity: cell.secondary_reward.unwrap_or(0),
        },
        Reward {
            name: COMMIT_REWARD_LABEL,
            capacity: cell.commit_reward.unwrap_or(0),
        },
        Reward {
            name: PROPOSAL_REWARD_LABEL,
            capacity: cell.proposal_reward.unwrap_or(0),
        },
    ])
}

/// Confirmations of a transaction given the chain tip.
///
/// Zero when either number is unknown (zero) or the tip lags the block.
#[must_use]
pub fn confirmation(tip_block_number: u64, block_number: u64) -> u64 {
    if tip_block_number == 0 || block_number == 0 || tip_block_number < block_number {
        return 0;
    }
    tip_block_number - block_number + 1
}

// ============================================================================
// Tests
// ============================================================================
