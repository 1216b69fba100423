//! # Validation Module
//!
//! The structural gate every candidate item passes before it can enter the
//! cart.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Candidate Item Gate                                │
//! │                                                                         │
//! │  Catalog / promotional offer                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  validate_cart_item(candidate)   ◄── fixed check order, first           │
//! │           │                          failure wins                       │
//! │           ├── id non-empty?                                             │
//! │           ├── name 1..=100 chars?                                       │
//! │           ├── description 1..=500 chars?                                │
//! │           ├── price non-empty?                                          │
//! │           ├── icon non-empty?                                           │
//! │           └── currency non-empty?                                       │
//! │           │                                                             │
//! │           ├── Err(ValidationError) → add is dropped, cart unchanged     │
//! │           └── Ok(())               → item appended as-is (no coercion)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The optional fields need no runtime checks: `original_price` and
//! `features` are `Option<String>` / `Option<Vec<String>>`, so "must be a
//! string (sequence)" is discharged by the type system.
//!
//! ## Usage
//! ```rust
//! use streamcart_core::validation::{validate_item_id, validate_item_name};
//!
//! assert!(validate_item_id("YouTube Premium").is_ok());
//! assert!(validate_item_id("").is_err());
//! assert!(validate_item_name(&"A".repeat(200)).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::CartItem;
use crate::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN};

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an item id.
///
/// ## Rules
/// - Must not be empty (it is the deduplication key)
/// - Otherwise unconstrained: the catalog uses display names as ids
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    Ok(())
}

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 100 characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates an item description.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 500 characters
pub fn validate_item_description(description: &str) -> ValidationResult<()> {
    if description.is_empty() {
        return Err(ValidationError::Required {
            field: "description".to_string(),
        });
    }

    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

/// Validates an item price.
///
/// ## Rules
/// - Must not be empty
/// - NOT parsed here: the price stays a display string until total
///   computation, which has its own zero-degradation policy
pub fn validate_item_price(price: &str) -> ValidationResult<()> {
    if price.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates an item icon.
pub fn validate_item_icon(icon: &str) -> ValidationResult<()> {
    if icon.is_empty() {
        return Err(ValidationError::Required {
            field: "icon".to_string(),
        });
    }

    Ok(())
}

/// Validates an item currency label.
pub fn validate_item_currency(currency: &str) -> ValidationResult<()> {
    if currency.is_empty() {
        return Err(ValidationError::Required {
            field: "currency".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Item Validator
// =============================================================================

/// Runs every structural check on a candidate, in the fixed order, stopping
/// at the first failure.
///
/// On success the candidate is accepted exactly as supplied - no field is
/// trimmed, coerced, or rewritten.
pub fn validate_cart_item(item: &CartItem) -> ValidationResult<()> {
    validate_item_id(&item.id)?;
    validate_item_name(&item.name)?;
    validate_item_description(&item.description)?;
    validate_item_price(&item.price)?;
    validate_item_icon(&item.icon)?;
    validate_item_currency(&item.currency)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> CartItem {
        CartItem {
            id: "Prime Video".to_string(),
            name: "Prime Video".to_string(),
            description: "Amazon Prime streaming".to_string(),
            price: "$70".to_string(),
            original_price: None,
            icon: "🎬".to_string(),
            currency: "USD".to_string(),
            features: None,
        }
    }

    #[test]
    fn test_valid_candidate_passes_unchanged() {
        let item = candidate();
        assert!(validate_cart_item(&item).is_ok());
        // No coercion: the display price is still a string afterwards.
        assert_eq!(item.price, "$70");
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut item = candidate();
        item.id = String::new();
        let err = validate_cart_item(&item).unwrap_err();
        assert_eq!(err.field(), "id");
    }

    #[test]
    fn test_name_limits() {
        assert!(validate_item_name("YouTube Premium").is_ok());
        assert!(validate_item_name(&"A".repeat(100)).is_ok());
        assert!(validate_item_name(&"A".repeat(101)).is_err());
        assert!(validate_item_name("").is_err());
    }

    #[test]
    fn test_description_limits() {
        assert!(validate_item_description(&"d".repeat(500)).is_ok());
        assert!(validate_item_description(&"d".repeat(501)).is_err());
        assert!(validate_item_description("").is_err());
    }

    /// Arabic text must be measured in characters, not bytes.
    #[test]
    fn test_limits_count_chars_not_bytes() {
        let name = "د".repeat(100); // 200 bytes, 100 chars
        assert!(validate_item_name(&name).is_ok());
    }

    /// First-failure-wins: with several bad fields, the reported failure is
    /// the earliest one in the evaluation order.
    #[test]
    fn test_first_failure_wins() {
        let mut item = candidate();
        item.name = "x".repeat(200);
        item.price = String::new();
        let err = validate_cart_item(&item).unwrap_err();
        assert_eq!(err.field(), "name");
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        // The gate checks emptiness, not content; " " is a (strange but
        // structurally valid) value.
        assert!(validate_item_id(" ").is_ok());
    }
}
