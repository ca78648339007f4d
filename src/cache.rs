//! Advisory local snapshots of fetched data.
//!
//! Snapshots let a view show the last known data while a fresh request is in
//! flight. They are never authoritative: fresh data always replaces them.
//!
//! Each [`CachedKey`] maps to one JSON file in a per-network directory under
//! the platform cache directory (see [`crate::paths::AppPaths::cache_dir`]).
//! Networks never read each other's snapshots.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::{ExplorerError, Network};
use crate::paths::AppPaths;

// ============================================================================
// Keys
// ============================================================================

/// Fixed set of cache entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CachedKey {
    StatisticsChart,
}

impl CachedKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StatisticsChart => "statistics_chart",
        }
    }

    fn file_name(self) -> String {
        format!("{}.json", self.as_str())
    }
}

// ============================================================================
// Data Cache
// ============================================================================

#[derive(Debug)]
enum Backend {
    Disk(PathBuf),
    Memory(Mutex<HashMap<CachedKey, String>>),
}

/// Key-value store for cached sequences.
#[derive(Debug)]
pub struct DataCache {
    backend: Backend,
}

impl DataCache {
    /// Cache for `network` under the platform cache directory.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::Cache` if the directory cannot be determined
    /// or created.
    pub fn open_for(network: &Network) -> Result<Self, ExplorerError> {
        let root = AppPaths::new()
            .cache_dir()
            .map_err(|e| ExplorerError::cache(e.to_string()))?;
        Ok(Self::for_network(root, network))
    }

    /// Cache for `network` in its own subdirectory of `root`.
    #[must_use]
    pub fn for_network(root: impl Into<PathBuf>, network: &Network) -> Self {
        Self::at(root.into().join(network_dir_name(network)))
    }

    /// Cache rooted at an explicit directory, created on first write.
    #[must_use]
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self {
            backend: Backend::Disk(dir.into()),
        }
    }

    /// Process-local cache that never touches the filesystem.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Mutex::new(HashMap::new())),
        }
    }

    /// Reads the sequence stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::Cache` if the entry exists but cannot be read
    /// or decoded.
    pub fn fetch_cached<T: DeserializeOwned>(
        &self,
        key: CachedKey,
    ) -> Result<Option<Vec<T>>, ExplorerError> {
        let raw = match &self.backend {
            Backend::Disk(dir) => {
                let path = dir.join(key.file_name());
                if !path.exists() {
                    return Ok(None);
                }
                fs::read_to_string(&path)
                    .map_err(|e| ExplorerError::cache(format!("{}: {e}", path.display())))?
            }
            Backend::Memory(entries) => match lock(entries)?.get(&key) {
                Some(raw) => raw.clone(),
                None => return Ok(None),
            },
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| ExplorerError::cache(format!("{}: {e}", key.as_str())))
    }

    /// Replaces the sequence stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::Cache` if the data cannot be encoded or written.
    pub fn store_cached<T: Serialize>(&self, key: CachedKey, data: &[T]) -> Result<(), ExplorerError> {
        let raw = serde_json::to_string(data)
            .map_err(|e| ExplorerError::cache(format!("{}: {e}", key.as_str())))?;

        match &self.backend {
            Backend::Disk(dir) => {
                fs::create_dir_all(dir)
                    .map_err(|e| ExplorerError::cache(format!("{}: {e}", dir.display())))?;
                let path = dir.join(key.file_name());
                fs::write(&path, raw)
                    .map_err(|e| ExplorerError::cache(format!("{}: {e}", path.display())))
            }
            Backend::Memory(entries) => {
                lock(entries)?.insert(key, raw);
                Ok(())
            }
        }
    }
}

/// Lowercased network name with anything outside `[a-z0-9_-]` replaced by
/// `-`, so custom names cannot escape the cache root.
fn network_dir_name(network: &Network) -> String {
    let name: String = network
        .as_str()
        .chars()
        .map(|c| match c.to_ascii_lowercase() {
            c @ ('a'..='z' | '0'..='9' | '_' | '-') => c,
            _ => '-',
        })
        .collect();
    if name.is_empty() { "custom".to_string() } else { name }
}

fn lock(
    entries: &Mutex<HashMap<CachedKey, String>>,
) -> Result<std::sync::MutexGuard<'_, HashMap<CachedKey, String>>, ExplorerError> {
    entries
        .lock()
        .map_err(|_| ExplorerError::cache("in-memory cache lock poisoned"))
}

// ============================================================================
// Tests
// ============================================================================
