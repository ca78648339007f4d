//! Chain-wide values shown in the header and detail views.

use crate::client::ExplorerApi;
use crate::state::{AppAction, Dispatch};

/// Loads the explorer's node version.
pub async fn init_node_version<A: ExplorerApi, D: Dispatch>(api: &A, dispatch: &mut D) {
    match api.fetch_node_version().await {
        Ok(version) => dispatch.dispatch(AppAction::UpdateNodeVersion { version }),
        Err(err) => tracing::warn!("Failed to load node version: {err}"),
    }
}

/// Loads the chain tip, used to count confirmations.
pub async fn get_tip_block_number<A: ExplorerApi, D: Dispatch>(api: &A, dispatch: &mut D) {
    match api.fetch_tip_block_number().await {
        Ok(tip_block_number) => {
            dispatch.dispatch(AppAction::UpdateTipBlockNumber { tip_block_number });
        }
        Err(err) => tracing::warn!("Failed to load tip block number: {err}"),
    }
}
