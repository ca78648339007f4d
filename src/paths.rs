//! Platform-specific path helpers for configuration and cache directories.
//!
//! | Platform | Config Dir | Cache Dir |
//! |----------|------------|-----------|
//! | Linux | `~/.config/ckbscan` | `~/.cache/ckbscan` |
//! | macOS | `~/Library/Application Support/ckbscan` | `~/Library/Caches/ckbscan` |
//! | Windows | `%APPDATA%/ckbscan` | `%LOCALAPPDATA%/ckbscan` |

use color_eyre::Result;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for directory naming.
pub const APP_NAME: &str = "ckbscan";

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

// ============================================================================
// AppPaths
// ============================================================================

/// Resolves the application's configuration and cache locations.
#[derive(Debug, Clone)]
pub struct AppPaths {
    app_name: String,
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl AppPaths {
    #[must_use]
    pub fn new() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
        }
    }

    /// Returns the configuration directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn config_dir(&self) -> Result<PathBuf> {
        let mut path = dirs::config_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find config directory"))?;
        path.push(&self.app_name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Returns the cache directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn cache_dir(&self) -> Result<PathBuf> {
        let mut path = dirs::cache_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find cache directory"))?;
        path.push(&self.app_name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined or created.
    pub fn config_file(&self) -> Result<PathBuf> {
        let mut path = self.config_dir()?;
        path.push(CONFIG_FILE_NAME);
        Ok(path)
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }
}

// ============================================================================
// Tests
// ============================================================================
