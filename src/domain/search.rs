//! Search query cleaning and the resolved search result type.

use serde_json::Value;

use super::wire::Wrapper;

// ============================================================================
// Search Query
// ============================================================================

/// A cleaned, non-empty search query.
///
/// Leading and trailing whitespace and every comma are removed; a query that
/// is empty after cleaning cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Cleans raw input into a query, returning `None` when nothing remains.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
        // Commas removed from the edges can expose more whitespace.
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            None
        } else {
            Some(Self(cleaned.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Search Result
// ============================================================================

/// What a search query resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    Block { block_hash: String },
    Transaction { transaction_hash: String },
    Address { address_hash: String },
    /// Lock hashes are shown in the address view.
    LockHash { lock_hash: String },
    /// An unrecognized type, or a known type missing its identifying field.
    Unknown { kind: String },
}

impl SearchResult {
    /// Builds a result from the `{type, attributes}` envelope.
    #[must_use]
    pub fn from_wrapper(wrapper: &Wrapper<Value>) -> Self {
        let attr = |name: &str| {
            wrapper
                .attributes
                .get(name)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let resolved = match wrapper.kind.as_str() {
            "block" => attr("block_hash").map(|block_hash| Self::Block { block_hash }),
            "ckb_transaction" => attr("transaction_hash")
                .map(|transaction_hash| Self::Transaction { transaction_hash }),
            "address" => attr("address_hash").map(|address_hash| Self::Address { address_hash }),
            "lock_hash" => attr("lock_hash").map(|lock_hash| Self::LockHash { lock_hash }),
            _ => None,
        };

        resolved.unwrap_or_else(|| Self::Unknown {
            kind: wrapper.kind.clone(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
