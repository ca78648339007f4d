//! Search endpoint for ExplorerClient.

use serde_json::Value;

use super::ExplorerClient;
use crate::domain::wire::Wrapper;
use crate::domain::{ExplorerError, SearchResult};

impl ExplorerClient {
    /// Resolve a cleaned query through the explorer's suggest endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::Api` when the explorer finds nothing; the
    /// error list distinguishes unknown addresses from other misses.
    pub async fn search(&self, query: &str) -> Result<SearchResult, ExplorerError> {
        if query.is_empty() {
            return Err(ExplorerError::invalid_input("Search query cannot be empty"));
        }

        let document = self
            .get_document::<Wrapper<Value>>(&["suggest_queries"], &[("q", query.to_string())])
            .await?;

        let result = SearchResult::from_wrapper(&document.data);
        tracing::debug!("Query '{query}' resolved to {result:?}");
        Ok(result)
    }
}
