//! Address transaction listing.

use crate::client::ExplorerApi;
use crate::domain::AddressTransactions;
use crate::state::{AppAction, Dispatch};

/// Loads one page of an address's transactions.
///
/// The page is dispatched first, then the total count. A failed request
/// clears both, so a stale page from another address is never shown.
pub async fn get_transactions_by_address<A, D>(
    api: &A,
    hash: &str,
    page: u32,
    size: u32,
    dispatch: &mut D,
) where
    A: ExplorerApi,
    D: Dispatch,
{
    let listing = match api.fetch_transactions_by_address(hash, page, size).await {
        Ok(listing) => {
            tracing::debug!(
                "Address {hash} page {page}: {} of {} transactions",
                listing.transactions.len(),
                listing.total
            );
            listing
        }
        Err(err) => {
            tracing::warn!("Failed to load transactions for {hash}: {err}");
            AddressTransactions::default()
        }
    };

    dispatch.dispatch(AppAction::UpdateAddressTransactions {
        transactions: listing.transactions,
    });
    dispatch.dispatch(AppAction::UpdateAddressTotal {
        total: listing.total,
    });
}
