//! Application-wide constants.

// ============================================================================
// API Endpoints
// ============================================================================

/// Explorer API base URL for the CKB mainnet (Lina).
pub const MAINNET_API_URL: &str = "https://mainnet-api.explorer.nervos.org/api/v1";

/// Explorer API base URL for the CKB testnet (Aggron).
pub const TESTNET_API_URL: &str = "https://testnet-api.explorer.nervos.org/api/v1";

/// Media type the explorer API requires for both `Content-Type` and `Accept`.
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

// ============================================================================
// Paging
// ============================================================================

/// Default page for address transaction listings.
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size for address transaction listings.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

// ============================================================================
// Units
// ============================================================================

/// Shannons per CKB.
pub const SHANNONS_PER_CKB: u64 = 100_000_000;

/// Hash rates arrive in units a thousand times larger than the chart axis.
pub const HASH_RATE_SCALE: f64 = 1000.0;

// ============================================================================
// Messages
// ============================================================================

/// Toast shown when a search query is empty after cleaning.
pub const TOAST_INVALID_CONTENT: &str = "Please enter valid content";

// Reward row labels, in display order.
pub const BASE_REWARD_LABEL: &str = "Base Reward";
pub const SECONDARY_REWARD_LABEL: &str = "Secondary Reward";
pub const COMMIT_REWARD_LABEL: &str = "Commit Reward";
pub const PROPOSAL_REWARD_LABEL: &str = "Proposal Reward";
