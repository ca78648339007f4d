//! Routes and navigation history.
//!
//! A [`Route`] renders to the string paths the explorer's views live at.
//! Search submissions push a new entry; failed lookups replace the current
//! one so "back" skips the dead page.

use crate::domain::SearchResult;

// ============================================================================
// Route
// ============================================================================

/// A navigable view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Block(String),
    Transaction(String),
    Address(String),
    /// Search yielded nothing usable; carries the query that was tried.
    SearchFail(String),
}

impl Route {
    /// Route a resolved search result leads to.
    ///
    /// Lock hashes open the address view; unknown results fall back to the
    /// failure page for `query`.
    #[must_use]
    pub fn for_search_result(result: &SearchResult, query: &str) -> Self {
        match result {
            SearchResult::Block { block_hash } => Self::Block(block_hash.clone()),
            SearchResult::Transaction { transaction_hash } => {
                Self::Transaction(transaction_hash.clone())
            }
            SearchResult::Address { address_hash } => Self::Address(address_hash.clone()),
            SearchResult::LockHash { lock_hash } => Self::Address(lock_hash.clone()),
            SearchResult::Unknown { .. } => Self::SearchFail(query.to_string()),
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Block(hash) => format!("/block/{hash}"),
            Self::Transaction(hash) => format!("/transaction/{hash}"),
            Self::Address(hash) => format!("/address/{hash}"),
            Self::SearchFail(query) => format!("/search/fail?q={query}"),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

// ============================================================================
// Navigator
// ============================================================================

/// Receives navigation requests from the services.
pub trait Navigator {
    /// Adds a new history entry.
    fn push(&mut self, route: Route);
    /// Replaces the current history entry.
    fn replace(&mut self, route: Route);
}

/// In-memory navigation stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<Route>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Route> {
        self.entries.last()
    }

    #[must_use]
    pub fn entries(&self) -> &[Route] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Navigator for History {
    fn push(&mut self, route: Route) {
        tracing::debug!("push {route}");
        self.entries.push(route);
    }

    fn replace(&mut self, route: Route) {
        tracing::debug!("replace {route}");
        match self.entries.last_mut() {
            Some(current) => *current = route,
            None => self.entries.push(route),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
