//! Transaction detail loading.

use crate::client::ExplorerApi;
use crate::state::{AppAction, Dispatch, Navigator, Route};

/// Loads one transaction into the store.
///
/// A found transaction is annotated with its genesis flag and dispatched.
/// A missing transaction or a failed request replaces the current route
/// with the failure page for `hash` and dispatches nothing.
pub async fn get_transaction_by_hash<A, N, D>(
    api: &A,
    hash: &str,
    navigator: &mut N,
    dispatch: &mut D,
) where
    A: ExplorerApi,
    N: Navigator,
    D: Dispatch,
{
    match api.fetch_transaction_by_hash(hash).await {
        Ok(Some(transaction)) => {
            dispatch.dispatch(AppAction::UpdateTransaction {
                transaction: Box::new(transaction.annotate_genesis()),
            });
        }
        Ok(None) => {
            tracing::info!("Transaction {hash} not found");
            navigator.replace(Route::SearchFail(hash.to_string()));
        }
        Err(err) => {
            tracing::warn!("Failed to load transaction {hash}: {err}");
            navigator.replace(Route::SearchFail(hash.to_string()));
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExplorerError, TransactionRecord};
    use crate::state::History;
    use crate::test_utils::{MockExplorer, RecordingNavigator, TransactionMother};
    use rstest::rstest;

    async fn load(api: &MockExplorer, hash: &str) -> (History, Vec<AppAction>) {
        let mut history = History::new();
        history.push(Route::Transaction(hash.to_string()));
        let mut actions = Vec::new();
        get_transaction_by_hash(api, hash, &mut history, &mut actions).await;
        (history, actions)
    }

    fn loaded(actions: &[AppAction]) -> &TransactionRecord {
        match actions {
            [AppAction::UpdateTransaction { transaction }] => transaction,
            other => panic!("expected a single transaction update, got {other:?}"),
        }
    }

    #[rstest]
    #[case::genesis(0, true)]
    #[case::regular(12, false)]
    #[tokio::test]
    async fn test_found_transaction_is_annotated(#[case] block_number: u64, #[case] genesis: bool) {
        let api = MockExplorer::new().with_transaction(Ok(Some(TransactionMother::with_outputs(
            block_number,
            2,
        ))));
        let (history, actions) = load(&api, "0xabc").await;

        let transaction = loaded(&actions);
        assert_eq!(transaction.display_outputs[0].is_genesis_output, genesis);
        assert!(!transaction.display_outputs[1].is_genesis_output);
        assert_eq!(history.entries(), &[Route::Transaction("0xabc".into())]);
    }

    #[tokio::test]
    async fn test_transaction_without_outputs_is_dispatched_unchanged() {
        let record = TransactionMother::with_outputs(0, 0);
        let api = MockExplorer::new().with_transaction(Ok(Some(record.clone())));
        let (_, actions) = load(&api, "0xabc").await;
        assert_eq!(loaded(&actions), &record);
    }

    #[rstest]
    #[case::rejected(Err(ExplorerError::parse("timed out")))]
    #[case::missing(Ok(None))]
    #[tokio::test]
    async fn test_failure_replaces_route_once(
        #[case] response: Result<Option<TransactionRecord>, ExplorerError>,
    ) {
        let api = MockExplorer::new().with_transaction(response);
        let (history, actions) = load(&api, "0xdead").await;

        assert!(actions.is_empty());
        assert_eq!(history.entries(), &[Route::SearchFail("0xdead".into())]);
        assert_eq!(history.current().map(Route::path).as_deref(), Some("/search/fail?q=0xdead"));
        assert_eq!(api.transaction_calls(), 1);
    }

    #[rstest]
    #[case::rejected(Err(ExplorerError::parse("timed out")))]
    #[case::missing(Ok(None))]
    #[tokio::test]
    async fn test_failure_calls_replace_exactly_once(
        #[case] response: Result<Option<TransactionRecord>, ExplorerError>,
    ) {
        let api = MockExplorer::new().with_transaction(response);
        let mut navigator = RecordingNavigator::default();
        let mut actions = Vec::new();
        get_transaction_by_hash(&api, "0xdead", &mut navigator, &mut actions).await;

        assert_eq!(navigator.replaces, vec![Route::SearchFail("0xdead".into())]);
        assert!(navigator.pushes.is_empty());
        assert!(actions.is_empty());
    }

    #[tokio::test]
    async fn test_found_transaction_does_not_navigate() {
        let api =
            MockExplorer::new().with_transaction(Ok(Some(TransactionMother::with_outputs(3, 1))));
        let mut navigator = RecordingNavigator::default();
        let mut actions = Vec::new();
        get_transaction_by_hash(&api, "0xabc", &mut navigator, &mut actions).await;

        assert!(navigator.replaces.is_empty());
        assert!(navigator.pushes.is_empty());
        assert_eq!(actions.len(), 1);
    }
}
