//! Network selection for the explorer API.

use serde::{Deserialize, Serialize};

use crate::constants::{MAINNET_API_URL, TESTNET_API_URL};

// ============================================================================
// Network
// ============================================================================

/// CKB networks an explorer API can serve.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Network {
    /// Lina, the production network.
    #[default]
    Mainnet,
    /// Aggron, the public test network.
    Testnet,
    /// A self-hosted explorer API.
    Custom { name: String, api_url: String },
}

impl Network {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Mainnet => "Mainnet",
            Self::Testnet => "Testnet",
            Self::Custom { name, .. } => name,
        }
    }

    /// Base URL of the explorer API, without a trailing slash.
    #[must_use]
    pub fn api_url(&self) -> &str {
        match self {
            Self::Mainnet => MAINNET_API_URL,
            Self::Testnet => TESTNET_API_URL,
            Self::Custom { api_url, .. } => api_url.trim_end_matches('/'),
        }
    }

    /// Parses a built-in network name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "mainnet" | "lina" => Some(Self::Mainnet),
            "testnet" | "aggron" => Some(Self::Testnet),
            _ => None,
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
