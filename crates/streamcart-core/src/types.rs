//! # Domain Types
//!
//! Core domain types used throughout StreamCart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌────────────────────────────┐         │
//! │  │      Region         │        │         CartItem           │         │
//! │  │  ─────────────────  │        │  ────────────────────────  │         │
//! │  │  Us        (USD/$)  │ picks  │  id (dedup key)            │         │
//! │  │  MiddleEast(KWD/د.ك)│──────► │  name, description, icon   │         │
//! │  │                     │ prices │  price  "display string"   │         │
//! │  └─────────────────────┘        │  originalPrice?, currency  │         │
//! │                                 │  features?                 │         │
//! │                                 └────────────────────────────┘         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Display-String Prices
//! `CartItem.price` is intentionally a *display* string ("$60", "د.ك9"), not
//! a number. The catalog produces prices already formatted for its region;
//! the numeric value only matters at total-computation time, when
//! [`crate::price::parse_display_price`] takes it apart again.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::price::KWD_PREFIX;

// =============================================================================
// Region
// =============================================================================

/// A catalog/pricing market.
///
/// The region decides which services are offered, which currency their
/// display prices carry, and which payment channels are presented. It is
/// resolved once per session by the region picker; the cart itself never
/// inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// United States market, priced in USD.
    Us,
    /// Middle East market, priced in Kuwaiti dinar.
    MiddleEast,
}

impl Region {
    /// ISO 4217 currency code for this market.
    #[inline]
    pub const fn currency_code(&self) -> &'static str {
        match self {
            Region::Us => "USD",
            Region::MiddleEast => "KWD",
        }
    }

    /// Currency symbol prefixed to display prices in this market.
    ///
    /// ## Example
    /// ```rust
    /// use streamcart_core::types::Region;
    ///
    /// assert_eq!(Region::Us.currency_symbol(), "$");
    /// assert_eq!(Region::MiddleEast.currency_symbol(), "د.ك");
    /// ```
    #[inline]
    pub const fn currency_symbol(&self) -> &'static str {
        match self {
            Region::Us => "$",
            Region::MiddleEast => KWD_PREFIX,
        }
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// A service offer as it sits in the cart.
///
/// ## Design Notes
/// - `id` is the sole deduplication key; the catalog uses the display name
///   (or a stable literal for the IPTV bundle) so a service can only be in
///   the cart once.
/// - `price` and `original_price` stay display strings end to end; the cart
///   never coerces them on the way in.
/// - `original_price` is the struck-through "before discount" price. It is
///   display-only and never enters the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Unique identifier within one cart (deduplication key).
    pub id: String,

    /// Display name shown on the card and in the cart sheet.
    pub name: String,

    /// One-line blurb shown under the name.
    pub description: String,

    /// Display-formatted price (currency symbol + numeral), e.g. "$60".
    pub price: String,

    /// Display-formatted pre-discount price, struck through in the UI.
    pub original_price: Option<String>,

    /// Glyph identifier rendered next to the name.
    pub icon: String,

    /// Currency code or label, display only.
    pub currency: String,

    /// Feature bullet points, display only.
    pub features: Option<Vec<String>>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_currency() {
        assert_eq!(Region::Us.currency_code(), "USD");
        assert_eq!(Region::Us.currency_symbol(), "$");
        assert_eq!(Region::MiddleEast.currency_code(), "KWD");
        assert_eq!(Region::MiddleEast.currency_symbol(), "د.ك");
    }

    #[test]
    fn test_region_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Region::Us).unwrap(), "\"us\"");
        assert_eq!(
            serde_json::to_string(&Region::MiddleEast).unwrap(),
            "\"middleeast\""
        );
    }

    /// The UI consumes camelCase JSON; this is the wire contract.
    #[test]
    fn test_cart_item_serializes_camel_case() {
        let item = CartItem {
            id: "Spotify Premium".to_string(),
            name: "Spotify Premium".to_string(),
            description: "High-quality music streaming".to_string(),
            price: "$50".to_string(),
            original_price: Some("$120".to_string()),
            icon: "🎵".to_string(),
            currency: "USD".to_string(),
            features: Some(vec!["No ads".to_string()]),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["originalPrice"], "$120");
        assert!(json.get("original_price").is_none());
    }
}
