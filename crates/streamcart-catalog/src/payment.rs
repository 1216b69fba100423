//! # Payment Channels
//!
//! Out-of-band payment details per region. There is no payment processing
//! anywhere in this system: the cart sheet shows a channel handle, the buyer
//! copies it, pays outside the storefront, then contacts the shop on
//! Instagram with the order details.
//!
//! ## Regional Split
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Region        Channels                     Contact                     │
//! │  ──────        ────────                     ───────                     │
//! │  Us            CashApp, Bitcoin             @streamcart.us              │
//! │  MiddleEast    PayPal                       @streamcart                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use streamcart_core::types::Region;

// Channel handles shown (and copied) verbatim in the cart sheet.
const CASHAPP_HANDLE: &str = "$streamcartpay";
const BTC_ADDRESS: &str = "bc1qx7w0m4tz935qfl29jlxnaxzwyvnpqsc8a24lme";
const PAYPAL_EMAIL: &str = "orders@streamcart.shop";

const US_CONTACT: &str = "streamcart.us";
const MIDDLE_EAST_CONTACT: &str = "streamcart";

/// Instagram handles: 1-30 characters, letters/digits/dots/underscores.
static INSTAGRAM_HANDLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._]{1,30}$").expect("static handle pattern"));

// =============================================================================
// Types
// =============================================================================

/// A way to pay, named for the cart sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// CashApp cashtag transfer.
    CashApp,
    /// On-chain Bitcoin transfer.
    Bitcoin,
    /// PayPal transfer to the shop's address.
    PayPal,
}

/// A payment channel as presented in the cart sheet.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentChannel {
    pub method: PaymentMethod,

    /// Short label for the channel card, e.g. "CashApp".
    pub label: String,

    /// The copyable handle/address/email the buyer pays to.
    pub address: String,
}

// =============================================================================
// Public Surface
// =============================================================================

/// The payment channels offered in a region, in display order.
pub fn payment_channels(region: Region) -> Vec<PaymentChannel> {
    match region {
        Region::Us => vec![
            PaymentChannel {
                method: PaymentMethod::CashApp,
                label: "CashApp".to_string(),
                address: CASHAPP_HANDLE.to_string(),
            },
            PaymentChannel {
                method: PaymentMethod::Bitcoin,
                label: "Bitcoin".to_string(),
                address: BTC_ADDRESS.to_string(),
            },
        ],
        Region::MiddleEast => vec![PaymentChannel {
            method: PaymentMethod::PayPal,
            label: "PayPal".to_string(),
            address: PAYPAL_EMAIL.to_string(),
        }],
    }
}

/// The Instagram handle buyers contact after paying.
pub fn contact_handle(region: Region) -> &'static str {
    match region {
        Region::Us => US_CONTACT,
        Region::MiddleEast => MIDDLE_EAST_CONTACT,
    }
}

/// Checks that a handle is shaped like a real Instagram handle.
///
/// The cart sheet builds an `instagram.com/<handle>` link from this value,
/// so anything outside the handle alphabet must be refused before it reaches
/// a rendered URL.
pub fn is_valid_instagram_handle(handle: &str) -> bool {
    INSTAGRAM_HANDLE.is_match(handle)
}

/// The post-payment instructions line shown under the channels.
pub fn payment_instructions(region: Region) -> String {
    format!(
        "After payment, contact us on Instagram @{} with your order details \
         and payment confirmation for service activation.",
        contact_handle(region)
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_us_channels() {
        let channels = payment_channels(Region::Us);
        let methods: Vec<PaymentMethod> = channels.iter().map(|c| c.method).collect();
        assert_eq!(methods, vec![PaymentMethod::CashApp, PaymentMethod::Bitcoin]);
    }

    #[test]
    fn test_middle_east_channels() {
        let channels = payment_channels(Region::MiddleEast);
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].method, PaymentMethod::PayPal);
    }

    #[test]
    fn test_instructions_name_the_region_contact() {
        assert!(payment_instructions(Region::Us).contains("@streamcart.us"));
        assert!(payment_instructions(Region::MiddleEast).contains("@streamcart "));
    }

    #[test]
    fn test_contact_handles_are_well_formed() {
        assert!(is_valid_instagram_handle(contact_handle(Region::Us)));
        assert!(is_valid_instagram_handle(contact_handle(Region::MiddleEast)));
    }

    #[test]
    fn test_handle_validation_rejects_link_breaking_input() {
        assert!(!is_valid_instagram_handle(""));
        assert!(!is_valid_instagram_handle("has space"));
        assert!(!is_valid_instagram_handle("slash/injection"));
        assert!(!is_valid_instagram_handle(&"a".repeat(31)));
    }
}
