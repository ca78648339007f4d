//! Statistics chart normalization.
//!
//! Hash-rate and difficulty are sampled on different cadences, so the
//! hash-rate series drives the merge and difficulty samples are attached
//! only where a rate sample shares their block number.

use crate::cache::{CachedKey, DataCache};
use crate::client::ExplorerApi;
use crate::constants::HASH_RATE_SCALE;
use crate::domain::{ChartPoint, DifficultyPoint, HashRatePoint, StatisticsChart};
use crate::state::{AppAction, Dispatch};

/// Scales a raw hash rate to the chart unit, rounded to a whole number.
fn scale_hash_rate(rate: f64) -> u64 {
    // `as` saturates: negatives and NaN become 0.
    (rate * HASH_RATE_SCALE).round() as u64
}

fn difficulty_points(difficulty: &DifficultyPoint) -> [ChartPoint; 2] {
    [
        ChartPoint::Difficulty {
            block_number: difficulty.block_number,
            difficulty: difficulty.difficulty,
        },
        ChartPoint::EpochNumber {
            block_number: difficulty.block_number,
            epoch_number: difficulty.epoch_number,
        },
    ]
}

/// Merges the two series into a flat list of chart points.
///
/// With hash rates present, each yields a `HashRate` point followed by the
/// `Difficulty` and `EpochNumber` points of the first difficulty sample at
/// the same block, if any. Without hash rates, each difficulty sample yields
/// its pair. Input order is preserved; nothing is re-sorted.
#[must_use]
pub fn merge_statistics(
    hash_rates: &[HashRatePoint],
    difficulties: &[DifficultyPoint],
) -> Vec<ChartPoint> {
    if hash_rates.is_empty() {
        return difficulties.iter().flat_map(difficulty_points).collect();
    }

    let mut points = Vec::with_capacity(hash_rates.len() * 3);
    for rate in hash_rates {
        points.push(ChartPoint::HashRate {
            block_number: rate.block_number,
            hash_rate: scale_hash_rate(rate.hash_rate),
        });
        if let Some(difficulty) = difficulties
            .iter()
            .find(|d| d.block_number == rate.block_number)
        {
            points.extend(difficulty_points(difficulty));
        }
    }
    points
}

/// [`merge_statistics`] over a chart response whose series may be absent.
#[must_use]
pub fn normalize_statistics(chart: &StatisticsChart) -> Vec<ChartPoint> {
    merge_statistics(
        chart.hash_rate.as_deref().unwrap_or_default(),
        chart.difficulty.as_deref().unwrap_or_default(),
    )
}

/// Loads chart points, showing the cached snapshot first.
///
/// A non-empty snapshot is dispatched before the request is issued. A
/// non-empty fresh result is written to the cache and dispatched, fully
/// replacing the snapshot. An empty result or a failed request leaves
/// whatever was dispatched in place. Cache failures are logged only.
pub async fn get_statistics_chart<A, D>(api: &A, cache: &DataCache, dispatch: &mut D)
where
    A: ExplorerApi,
    D: Dispatch,
{
    match cache.fetch_cached::<ChartPoint>(CachedKey::StatisticsChart) {
        Ok(Some(points)) if !points.is_empty() => {
            tracing::debug!("Showing {} cached chart points", points.len());
            dispatch.dispatch(AppAction::UpdateStatisticsChartData { points });
        }
        Ok(_) => {}
        Err(err) => tracing::warn!("Ignoring unreadable chart cache: {err}"),
    }

    let chart = match api.fetch_statistics_chart().await {
        Ok(chart) => chart,
        Err(err) => {
            tracing::warn!("Statistics chart fetch failed: {err}");
            return;
        }
    };

    let points = normalize_statistics(&chart);
    if points.is_empty() {
        tracing::info!("Not enough history to chart yet");
        return;
    }

    if let Err(err) = cache.store_cached(CachedKey::StatisticsChart, &points) {
        tracing::warn!("Failed to cache chart points: {err}");
    }
    dispatch.dispatch(AppAction::UpdateStatisticsChartData { points });
}

// ============================================================================
// Tests
// ============================================================================
