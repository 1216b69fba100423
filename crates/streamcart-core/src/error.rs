//! # Error Types
//!
//! Domain-specific error types for streamcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  streamcart-core errors (this file)                                    │
//! │  ├── ValidationError  - A candidate item fails a structural check      │
//! │  └── PriceError       - A display price cannot be parsed               │
//! │                                                                         │
//! │  streamcart-session errors (separate crate)                            │
//! │  └── ApiError         - What the storefront UI sees (serialized)       │
//! │                                                                         │
//! │  Flow: ValidationError ──► ApiError ──► UI notification                 │
//! │        PriceError ──────► zero contribution + warn log (never surfaced) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending input)
//! 3. Errors are enum variants, never String
//! 4. No error here ever escapes the cart as a panic - callers get a
//!    `Result` and every failure mode has a defined recovery

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// A candidate cart item failed a structural check.
///
/// Validation is first-failure-wins: the error names the field that failed
/// first in the fixed evaluation order, never an aggregate of all failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value exceeds its maximum length.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

impl ValidationError {
    /// The name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field } | ValidationError::TooLong { field, .. } => field,
        }
    }
}

// =============================================================================
// Price Error
// =============================================================================

/// A display-formatted price string could not be turned into an amount.
///
/// ## Recovery Contract
/// The total computation treats a `PriceError` as a zero contribution for
/// that item and keeps going. It is reported (logged), never propagated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriceError {
    /// Nothing numeric was left after stripping currency symbols.
    #[error("price '{raw}' has no parseable amount")]
    Unparseable { raw: String },

    /// The price parsed to a negative amount.
    #[error("price '{raw}' is negative")]
    Negative { raw: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience alias for validation outcomes.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convenience alias for price-parsing outcomes.
pub type PriceResult<T> = Result<T, PriceError>;

// =============================================================================
// Unit Tests
// =============================================================================
