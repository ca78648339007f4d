//! Search resolution.

use crate::client::ExplorerApi;
use crate::constants::TOAST_INVALID_CONTENT;
use crate::domain::{HttpErrorCode, SearchQuery};
use crate::state::{AppAction, Dispatch, Navigator, Route, SearchInput};

/// Resolves the search box's content into a navigation.
///
/// Empty input (after trimming and dropping commas) only raises a toast.
/// Otherwise the query is sent to the explorer and exactly one route is
/// pushed:
///
/// - a resolved block, transaction, address or lock hash opens its view
///   (lock hashes use the address view) and clears the input;
/// - an API error carrying [`HttpErrorCode::NotFoundAddress`] opens the
///   address view for the raw query, which may be a fresh address;
/// - anything else (unknown result type, other error codes, no error data)
///   opens the failure page and leaves the query in the input.
///
/// If the header search bar is in editable mode it is switched off before
/// the request is made. Returns the pushed route.
pub async fn handle_search<A, D, N>(
    api: &A,
    input: &mut SearchInput,
    search_bar_editable: bool,
    dispatch: &mut D,
    navigator: &mut N,
) -> Option<Route>
where
    A: ExplorerApi,
    D: Dispatch,
    N: Navigator,
{
    let Some(query) = SearchQuery::parse(&input.value) else {
        dispatch.dispatch(AppAction::ShowToastMessage {
            message: TOAST_INVALID_CONTENT.to_string(),
        });
        return None;
    };

    if search_bar_editable {
        dispatch.dispatch(AppAction::UpdateHeaderSearchEditable { editable: false });
    }

    let route = match api.fetch_search_result(query.as_str()).await {
        Ok(result) => {
            input.clear();
            let route = Route::for_search_result(&result, query.as_str());
            if matches!(route, Route::SearchFail(_)) {
                tracing::debug!("Query '{query}' resolved to unsupported {result:?}");
                input.set(query.as_str());
            }
            route
        }
        Err(err) if err.has_code(HttpErrorCode::NotFoundAddress) => {
            tracing::debug!("Query '{query}' is not a known address yet: {err}");
            Route::Address(query.to_string())
        }
        Err(err) => {
            tracing::info!("Search for '{query}' failed: {err}");
            input.set(query.as_str());
            Route::SearchFail(query.to_string())
        }
    };

    navigator.push(route.clone());
    Some(route)
}

// ============================================================================
// Tests
// ============================================================================
