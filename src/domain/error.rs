//! Error types for explorer API operations.
//!
//! The explorer answers failed requests with a list of structured error
//! objects, each carrying a numeric code. [`ExplorerError::Api`] keeps that
//! list so callers can branch on a specific [`HttpErrorCode`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Error Codes
// ============================================================================

/// Numeric error codes reported by the explorer API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpErrorCode {
    /// `Content-Type` was not `application/vnd.api+json`.
    UnsupportedMediaType,
    /// `Accept` was not `application/vnd.api+json`.
    NotAcceptable,
    /// A URI parameter was not a well-formed hash.
    InvalidUriParameters,
    /// No transaction matches the given hash.
    NotFoundTransaction,
    /// No address matches the given hash.
    NotFoundAddress,
}

impl HttpErrorCode {
    /// Returns the wire value of this code.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::UnsupportedMediaType => 1001,
            Self::NotAcceptable => 1002,
            Self::InvalidUriParameters => 1005,
            Self::NotFoundTransaction => 1006,
            Self::NotFoundAddress => 1010,
        }
    }

    /// Maps a wire value back to a known code.
    #[must_use]
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1001 => Some(Self::UnsupportedMediaType),
            1002 => Some(Self::NotAcceptable),
            1005 => Some(Self::InvalidUriParameters),
            1006 => Some(Self::NotFoundTransaction),
            1010 => Some(Self::NotFoundAddress),
            _ => None,
        }
    }
}

// ============================================================================
// API Error Object
// ============================================================================

/// One structured error object from an explorer error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: u32,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
}

impl ApiError {
    #[must_use]
    pub fn new(code: u32) -> Self {
        Self {
            code,
            status: None,
            title: None,
            detail: None,
            href: None,
        }
    }

    /// Returns `true` if this error carries the given code.
    #[must_use]
    pub fn is(&self, code: HttpErrorCode) -> bool {
        self.code == code.code()
    }
}

// ============================================================================
// Explorer Error
// ============================================================================

/// Error type for explorer client operations.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Transport-level failure from the HTTP client.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error ({status}): {}", summarize(.errors))]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Structured error objects decoded from the body, possibly empty.
        errors: Vec<ApiError>,
    },

    /// JSON parsing or data structure errors.
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Local cache could not be read or written.
    #[error("Cache error: {message}")]
    Cache { message: String },

    /// The HTTP client could not be constructed.
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(String),
}

impl ExplorerError {
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    #[must_use]
    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }

    /// Structured error objects attached to this error, if any.
    #[must_use]
    pub fn api_errors(&self) -> &[ApiError] {
        match self {
            Self::Api { errors, .. } => errors,
            _ => &[],
        }
    }

    /// Returns `true` if any structured error carries the given code.
    #[must_use]
    pub fn has_code(&self, code: HttpErrorCode) -> bool {
        self.api_errors().iter().any(|e| e.is(code))
    }

    /// Convert to a `color_eyre::Report` for the binary's error handling.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

fn summarize(errors: &[ApiError]) -> String {
    if errors.is_empty() {
        return "no error details".to_string();
    }
    errors
        .iter()
        .map(|e| match &e.title {
            Some(title) => format!("{} {}", e.code, title),
            None => e.code.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(HttpErrorCode::UnsupportedMediaType, 1001)]
    #[case(HttpErrorCode::NotAcceptable, 1002)]
    #[case(HttpErrorCode::InvalidUriParameters, 1005)]
    #[case(HttpErrorCode::NotFoundTransaction, 1006)]
    #[case(HttpErrorCode::NotFoundAddress, 1010)]
    fn test_error_code_wire_values(#[case] code: HttpErrorCode, #[case] wire: u32) {
        assert_eq!(code.code(), wire);
        assert_eq!(HttpErrorCode::from_code(wire), Some(code));
    }

    #[test]
    fn test_unknown_code_has_no_mapping() {
        assert_eq!(HttpErrorCode::from_code(9999), None);
    }

    #[test]
    fn test_explorer_error_display() {
        let parse_err = ExplorerError::parse("test error");
        assert_eq!(format!("{parse_err}"), "Parse error: test error");

        let api_err = ExplorerError::Api {
            status: 404,
            errors: vec![ApiError {
                title: Some("Transaction Not Found".to_string()),
                ..ApiError::new(1006)
            }],
        };
        assert_eq!(
            format!("{api_err}"),
            "API error (404): 1006 Transaction Not Found"
        );

        let bare = ExplorerError::Api {
            status: 500,
            errors: Vec::new(),
        };
        assert_eq!(format!("{bare}"), "API error (500): no error details");
    }

    #[test]
    fn test_has_code_inspects_every_error() {
        let err = ExplorerError::Api {
            status: 404,
            errors: vec![ApiError::new(1006), ApiError::new(1010)],
        };
        assert!(err.has_code(HttpErrorCode::NotFoundAddress));
        assert!(err.has_code(HttpErrorCode::NotFoundTransaction));
        assert!(!err.has_code(HttpErrorCode::NotAcceptable));
    }

    #[test]
    fn test_non_api_errors_have_no_codes() {
        let err = ExplorerError::invalid_input("empty query");
        assert!(err.api_errors().is_empty());
        assert!(!err.has_code(HttpErrorCode::NotFoundAddress));
    }

    #[test]
    fn test_api_error_deserializes_with_optional_fields() {
        let json = r#"{"code": 1002, "status": 406, "title": "Not Acceptable",
            "detail": "Accept must be application/vnd.api+json",
            "href": "https://github.com/nervosnetwork/ckb-explorer"}"#;
        let error: ApiError = serde_json::from_str(json).unwrap();
        assert!(error.is(HttpErrorCode::NotAcceptable));
        assert_eq!(error.status, Some(406));

        let minimal: ApiError = serde_json::from_str(r#"{"code": 1010}"#).unwrap();
        assert_eq!(minimal, ApiError::new(1010));
    }
}
