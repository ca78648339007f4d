//! Statistics endpoints for ExplorerClient.

use super::ExplorerClient;
use crate::domain::wire::Wrapper;
use crate::domain::{ExplorerError, StatisticsChart};

impl ExplorerClient {
    /// Fetch the hash-rate and difficulty chart series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn statistics_chart(&self) -> Result<StatisticsChart, ExplorerError> {
        let document = self
            .get_document::<Wrapper<StatisticsChart>>(&["statistic_info_charts"], &[])
            .await?;
        Ok(document.data.attributes)
    }
}
