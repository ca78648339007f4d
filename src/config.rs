//! Application configuration with persistence.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/ckbscan/config.json`
//! - macOS: `~/Library/Application Support/ckbscan/config.json`
//! - Windows: `%APPDATA%/ckbscan/config.json`
//!
//! Command-line flags override what is loaded here for a single run; only
//! `config set-network` writes the file.

use color_eyre::{Report, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::HttpConfig;
use crate::client::http::DEFAULT_TIMEOUT_SECS;
use crate::domain::Network;
use crate::paths::AppPaths;

// ============================================================================
// AppConfig
// ============================================================================

/// Persisted settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Explorer network to query.
    #[serde(default)]
    pub network: Network,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Whether chart snapshots are read from and written to disk.
    #[serde(default = "default_use_cache")]
    pub use_cache: bool,
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

const fn default_use_cache() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network: Network::default(),
            timeout_secs: default_timeout_secs(),
            use_cache: default_use_cache(),
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        AppPaths::new().config_file()
    }

    /// Loads the configuration from disk, falling back to defaults.
    ///
    /// A missing file is the normal first-run state and is not reported
    /// above `debug`.
    #[must_use]
    pub fn load() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_default(&path),
            Err(err) => {
                tracing::warn!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Reads `path`, falling back to defaults if it is missing or invalid.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(err) if is_missing_file(&err) => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                tracing::warn!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Reads a configuration file at an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or the file cannot
    /// be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Writes the configuration to an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// HTTP settings derived from this configuration.
    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig::with_timeout(Duration::from_secs(self.timeout_secs))
    }

    /// Resolves a network from a CLI-style selector.
    ///
    /// Built-in names are matched first; anything else must come with an
    /// API URL and becomes a custom network of that name.
    #[must_use]
    pub fn resolve_network(name: &str, api_url: Option<&str>) -> Option<Network> {
        match (Network::from_name(name), api_url) {
            (Some(network), None) => Some(network),
            (_, Some(api_url)) => Some(Network::Custom {
                name: name.to_string(),
                api_url: api_url.to_string(),
            }),
            (None, None) => None,
        }
    }
}

fn is_missing_file(err: &Report) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::scratch_dir;
    use rstest::rstest;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.use_cache);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"network":"Testnet"}"#).unwrap();
        assert_eq!(config.network, Network::Testnet);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.use_cache);

        let empty: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, AppConfig::default());
    }

    #[test]
    fn test_custom_network_round_trip_through_file() {
        let path = scratch_dir("config").join("config.json");
        let config = AppConfig {
            network: Network::Custom {
                name: "devnet".to_string(),
                api_url: "http://127.0.0.1:3000/api/v1".to_string(),
            },
            timeout_secs: 5,
            use_cache: false,
        };

        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_load_from_invalid_json_fails() {
        let dir = scratch_dir("config-invalid");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        fs::write(&path, "network = mainnet").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_missing_file_loads_defaults_quietly() {
        let path = scratch_dir("config-missing").join("config.json");

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(is_missing_file(&err));
        assert_eq!(AppConfig::load_or_default(&path), AppConfig::default());
    }

    #[test]
    fn test_invalid_file_is_not_treated_as_missing() {
        let dir = scratch_dir("config-garbage");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        fs::write(&path, r#"{"timeout_secs": "soon"}"#).unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(!is_missing_file(&err));
        assert_eq!(AppConfig::load_or_default(&path), AppConfig::default());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_http_config_uses_timeout() {
        let config = AppConfig {
            timeout_secs: 7,
            ..AppConfig::default()
        };
        assert_eq!(config.http_config().timeout, Duration::from_secs(7));
    }

    #[rstest]
    #[case("mainnet", None, Some(Network::Mainnet))]
    #[case("Aggron", None, Some(Network::Testnet))]
    #[case("devnet", None, None)]
    #[case(
        "devnet",
        Some("http://localhost:3000/api/v1"),
        Some(Network::Custom { name: "devnet".into(), api_url: "http://localhost:3000/api/v1".into() })
    )]
    fn test_resolve_network(
        #[case] name: &str,
        #[case] api_url: Option<&str>,
        #[case] expected: Option<Network>,
    ) {
        assert_eq!(AppConfig::resolve_network(name, api_url), expected);
    }
}
