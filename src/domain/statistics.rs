//! Statistics chart types.
//!
//! Raw hash-rate and difficulty samples come from the API keyed by block
//! number; [`ChartPoint`] is the flattened, chart-ready form.

use serde::{Deserialize, Serialize};

use super::wire::{f64_lenient, u64_lenient};

// ============================================================================
// Raw Samples
// ============================================================================

/// Difficulty sample for one block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyPoint {
    #[serde(deserialize_with = "u64_lenient")]
    pub block_number: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub difficulty: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub epoch_number: u64,
}

/// Hash-rate sample for one block. The API sends the rate as a decimal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashRatePoint {
    #[serde(deserialize_with = "u64_lenient")]
    pub block_number: u64,
    #[serde(deserialize_with = "f64_lenient")]
    pub hash_rate: f64,
}

/// Attributes of the statistics chart response. Either series may be absent.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StatisticsChart {
    #[serde(default)]
    pub hash_rate: Option<Vec<HashRatePoint>>,
    #[serde(default)]
    pub difficulty: Option<Vec<DifficultyPoint>>,
}

// ============================================================================
// Chart Points
// ============================================================================

/// Which series a [`ChartPoint`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSeries {
    Difficulty,
    HashRate,
    EpochNumber,
}

impl ChartSeries {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Difficulty => "Difficulty",
            Self::HashRate => "HashRate",
            Self::EpochNumber => "EpochNumber",
        }
    }
}

/// One point on the difficulty / hash-rate chart.
///
/// Serialized as `{"type": "HashRate", "blockNumber": 100, "hashRate": 1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ChartPoint {
    #[serde(rename_all = "camelCase")]
    HashRate { block_number: u64, hash_rate: u64 },
    #[serde(rename_all = "camelCase")]
    Difficulty { block_number: u64, difficulty: u64 },
    #[serde(rename_all = "camelCase")]
    EpochNumber { block_number: u64, epoch_number: u64 },
}

impl ChartPoint {
    #[must_use]
    pub const fn series(&self) -> ChartSeries {
        match self {
            Self::HashRate { .. } => ChartSeries::HashRate,
            Self::Difficulty { .. } => ChartSeries::Difficulty,
            Self::EpochNumber { .. } => ChartSeries::EpochNumber,
        }
    }

    #[must_use]
    pub const fn block_number(&self) -> u64 {
        match self {
            Self::HashRate { block_number, .. }
            | Self::Difficulty { block_number, .. }
            | Self::EpochNumber { block_number, .. } => *block_number,
        }
    }

    #[must_use]
    pub const fn value(&self) -> u64 {
        match self {
            Self::HashRate { hash_rate, .. } => *hash_rate,
            Self::Difficulty { difficulty, .. } => *difficulty,
            Self::EpochNumber { epoch_number, .. } => *epoch_number,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
