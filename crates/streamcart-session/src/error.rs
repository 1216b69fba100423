//! # Boundary Error Type
//!
//! Unified, serializable error for the session API.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Error Flow in StreamCart                              │
//! │                                                                         │
//! │  Storefront UI                 Session Layer                            │
//! │  ─────────────                 ─────────────                            │
//! │                                                                         │
//! │  add_to_cart(candidate)                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Result<AddToCartResponse, ApiError>                             │  │
//! │  │         │                                                        │  │
//! │  │         ├── ValidationError ──► sanitized warn log ──► ApiError  │  │
//! │  │         │                       (cart untouched)                 │  │
//! │  │         └── Success ────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "VALIDATION_ERROR", "message": "name is required" }          │
//! │                                                                         │
//! │  The UI drops the add and may show a notification; the visible cart     │
//! │  never changes on a rejected candidate.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use streamcart_core::error::ValidationError;

/// What gets written over a scrubbed fragment in log output.
const REDACTED: &str = "[REDACTED]";

/// Message fragments that must never reach log sinks: filesystem paths,
/// local endpoints, and credential-shaped words.
static SENSITIVE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"[A-Za-z]:[\\/][^\s]+",     // Windows file paths
        r"/[^/\s]+/[^/\s]+/[^\s]*",  // Unix file paths
        r"localhost:\d+",            // Local URLs
        r"127\.0\.0\.1:\d+",         // Local IPs
        r"(?i)api[_-]?key",          // API keys
        r"(?i)token",                // Tokens
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("static sanitizer pattern"))
    .collect()
});

/// Scrubs sensitive-looking fragments from a message before it is logged.
///
/// Validation messages echo candidate field content, and candidates for a
/// promotional add can originate outside the fixed catalog - so everything
/// logged on the rejection path goes through here first.
pub fn sanitize_message(message: &str) -> String {
    SENSITIVE_PATTERNS
        .iter()
        .fold(message.to_string(), |scrubbed, pattern| {
            pattern.replace_all(&scrubbed, REDACTED).into_owned()
        })
}

// =============================================================================
// Api Error
// =============================================================================

/// Boundary error returned from session operations.
///
/// ## Serialization
/// This is what the UI receives when an operation fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "name must be at most 100 characters"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for session responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A candidate item failed the structural gate.
    ValidationError,

    /// A region-dependent operation ran before the picker resolved one.
    RegionNotSelected,
}

impl ApiError {
    /// Creates a new boundary error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a region-not-selected error.
    pub fn region_not_selected() -> Self {
        ApiError::new(
            ErrorCode::RegionNotSelected,
            "select a region before browsing the catalog",
        )
    }
}

/// Converts a structural rejection into a boundary error.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_wire_shape() {
        let err = ApiError::validation("name is required");
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "name is required");
    }

    #[test]
    fn test_validation_error_converts() {
        let core_err = ValidationError::Required {
            field: "price".to_string(),
        };
        let api_err = ApiError::from(core_err);

        assert_eq!(api_err.code, ErrorCode::ValidationError);
        assert_eq!(api_err.message, "price is required");
    }

    #[test]
    fn test_sanitizer_scrubs_paths_and_credentials() {
        let scrubbed = sanitize_message("failed reading /home/user/secret.txt");
        assert!(!scrubbed.contains("/home/user/"));
        assert!(scrubbed.contains("[REDACTED]"));

        let scrubbed = sanitize_message("bad api_key in C:\\Users\\shop\\cfg");
        assert!(!scrubbed.contains("api_key"));
        assert!(!scrubbed.contains("C:\\Users"));

        let scrubbed = sanitize_message("refresh ToKeN rejected at localhost:3000");
        assert!(!scrubbed.to_lowercase().contains("token"));
        assert!(!scrubbed.contains("localhost:3000"));
    }

    #[test]
    fn test_sanitizer_leaves_ordinary_messages_alone() {
        let message = "name must be at most 100 characters";
        assert_eq!(sanitize_message(message), message);
    }
}
