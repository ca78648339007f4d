//! Node and chain-tip endpoints for ExplorerClient.

use serde::Deserialize;

use super::ExplorerClient;
use crate::domain::ExplorerError;
use crate::domain::wire::{Wrapper, u64_lenient};

#[derive(Debug, Deserialize)]
struct NodeVersion {
    #[serde(default)]
    version: String,
}

#[derive(Debug, Deserialize)]
struct TipBlockNumber {
    #[serde(deserialize_with = "u64_lenient")]
    tip_block_number: u64,
}

impl ExplorerClient {
    /// Fetch the version of the CKB node behind the explorer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn node_version(&self) -> Result<String, ExplorerError> {
        let document = self
            .get_document::<Wrapper<NodeVersion>>(&["nets", "version"], &[])
            .await?;
        Ok(document.data.attributes.version)
    }

    /// Fetch the current tip block number.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn tip_block_number(&self) -> Result<u64, ExplorerError> {
        let document = self
            .get_document::<Wrapper<TipBlockNumber>>(&["statistics", "tip_block_number"], &[])
            .await?;
        Ok(document.data.attributes.tip_block_number)
    }
}
