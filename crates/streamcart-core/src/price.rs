//! # Display-Price Parsing
//!
//! Turns a display-formatted price string back into an amount for
//! aggregation.
//!
//! ## Why Parsing Instead of Stored Numbers?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE MIXED-SYMBOL PROBLEM                                               │
//! │                                                                         │
//! │  The catalog hands the cart prices as the user sees them:               │
//! │                                                                         │
//! │    US market:          "$60"      "$12.00"    "$1,200"                  │
//! │    Middle East market: "د.ك9"     "د.ك7.5"                              │
//! │                                                                         │
//! │  "د.ك" is a multi-character right-to-left symbol, so a naive            │
//! │  strip-the-first-char rule corrupts it. The parser therefore has        │
//! │  exactly two branches:                                                  │
//! │                                                                         │
//! │    1. starts with "د.ك"  → strip that prefix, keep the rest             │
//! │    2. anything else      → keep only ASCII digits and '.'               │
//! │                                                                         │
//! │  Branch 2 must NOT run on dinar prices: it would keep the '.' inside    │
//! │  "د.ك" and glue it onto the numeral ("د.ك9" → ".9").                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Trust Model
//! Prices come from the fixed, trusted catalog. The parser defends against
//! malformed strings (a missing price rendered as "N/A"), not adversarial
//! input; a failed parse degrades to a zero contribution at the call site.

use crate::error::{PriceError, PriceResult};

/// The Kuwaiti dinar symbol, used as a display-price prefix in the
/// Middle East market.
///
/// Three characters (`د`, `.`, `ك`) - note the embedded dot, which is why
/// dinar prices get their own parsing branch.
pub const KWD_PREFIX: &str = "د.ك";

/// Parses a display-formatted price string into a non-negative amount.
///
/// ## Algorithm (fixed, order-sensitive)
/// 1. If the string starts with [`KWD_PREFIX`], strip exactly that prefix;
///    the remainder is the numeral substring.
/// 2. Otherwise drop every character that is not an ASCII digit or `.`
///    (removes `$`, thousands separators, trailing currency codes).
/// 3. Parse the numeral substring as a float.
/// 4. Reject negative results.
///
/// ## Example
/// ```rust
/// use streamcart_core::price::parse_display_price;
///
/// assert_eq!(parse_display_price("$12.00").unwrap(), 12.0);
/// assert_eq!(parse_display_price("د.ك9").unwrap(), 9.0);
/// assert_eq!(parse_display_price("12").unwrap(), 12.0);
/// assert_eq!(parse_display_price("$1,200").unwrap(), 1200.0);
/// assert!(parse_display_price("N/A").is_err());
/// ```
///
/// ## Errors
/// [`PriceError::Unparseable`] if nothing numeric remains after stripping,
/// [`PriceError::Negative`] if the amount parses below zero. Callers
/// computing a cart total treat either as a zero contribution for that item
/// and keep going; the parser itself never decides that policy.
pub fn parse_display_price(display: &str) -> PriceResult<f64> {
    let numeral: String = match display.strip_prefix(KWD_PREFIX) {
        Some(rest) => rest.trim().to_string(),
        None => display
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect(),
    };

    let amount: f64 = numeral.parse().map_err(|_| PriceError::Unparseable {
        raw: display.to_string(),
    })?;

    if amount < 0.0 {
        return Err(PriceError::Negative {
            raw: display.to_string(),
        });
    }

    Ok(amount)
}

// =============================================================================
// Unit Tests
// =============================================================================
