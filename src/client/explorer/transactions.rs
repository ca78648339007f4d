//! Transaction endpoints for ExplorerClient.

use super::{ExplorerClient, is_not_found};
use crate::domain::wire::Wrapper;
use crate::domain::{AddressTransactions, ExplorerError, TransactionRecord};

impl ExplorerClient {
    /// Fetch a single transaction by hash.
    ///
    /// A 404 or an empty `data` member means the explorer has no such
    /// transaction and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failures, other API errors, or
    /// malformed bodies.
    pub async fn transaction_by_hash(
        &self,
        hash: &str,
    ) -> Result<Option<TransactionRecord>, ExplorerError> {
        match self
            .get_document::<Option<Wrapper<TransactionRecord>>>(&["transactions", hash], &[])
            .await
        {
            Ok(document) => Ok(document.data.map(|wrapper| wrapper.attributes)),
            Err(err) if is_not_found(&err) => {
                tracing::debug!("Transaction {hash} not found: {err}");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Fetch one page of transactions touching an address.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn address_transactions(
        &self,
        hash: &str,
        page: u32,
        size: u32,
    ) -> Result<AddressTransactions, ExplorerError> {
        let document = self
            .get_document::<Vec<Wrapper<TransactionRecord>>>(
                &["address_transactions", hash],
                &[("page", page.to_string()), ("page_size", size.to_string())],
            )
            .await?;

        Ok(AddressTransactions {
            transactions: document
                .data
                .into_iter()
                .map(|wrapper| wrapper.attributes)
                .collect(),
            total: document.meta.map(|m| m.total).unwrap_or(0),
        })
    }
}
