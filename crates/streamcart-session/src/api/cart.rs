//! # Cart Operations
//!
//! The cart manipulation surface.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Lifecycle                                     │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────────┐                     │
//! │  │  Empty   │────►│ Has      │────►│ Paid out-of- │                     │
//! │  │  Cart    │     │ Items    │     │ band, cleared│                     │
//! │  └──────────┘     └──────────┘     └──────────────┘                     │
//! │                        │                                                │
//! │                   add_to_cart                                           │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────► (back to empty)    │
//! │                                                                         │
//! │  There is no checkout state machine: payment happens outside the        │
//! │  system, so presence/absence of items is the only state dimension.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rejection Path
//! An invalid candidate is dropped, logged (sanitized), and reported as an
//! `ApiError`; the visible cart never changes. A duplicate add and a remove
//! of an absent id are successful no-ops.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{sanitize_message, ApiError};
use crate::state::{CartState, RegionState};
use streamcart_core::cart::{Cart, CartAdd};
use streamcart_core::types::{CartItem, Region};

// =============================================================================
// Response DTOs
// =============================================================================

/// Cart totals summary for rendering the badge and the total row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Number of items (one slot per item; there are no quantities).
    pub item_count: usize,

    /// Numeric total; unparseable item prices contribute zero.
    pub total: f64,

    /// Total formatted with the session's currency symbol, e.g. "$69.00".
    pub display_total: String,
}

impl CartTotals {
    fn compute(cart: &Cart, region: Option<Region>) -> Self {
        let total = cart.total();
        let display_total = match region {
            Some(region) => format!("{}{total:.2}", region.currency_symbol()),
            None => format!("{total:.2}"),
        };

        CartTotals {
            item_count: cart.item_count(),
            total,
            display_total,
        }
    }
}

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    /// Items in insertion order.
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl CartResponse {
    fn snapshot(cart: &Cart, region: Option<Region>) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::compute(cart, region),
        }
    }
}

/// Outcome of an accepted add.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartResponse {
    /// `false` means the item was already in the cart (nothing changed);
    /// the UI may surface an "already in cart" notice.
    pub added: bool,

    /// The cart after the operation.
    pub cart: CartResponse,
}

// =============================================================================
// Operations
// =============================================================================

/// Gets the current cart contents and totals.
pub fn get_cart(cart: &CartState, region: &RegionState) -> CartResponse {
    debug!("get_cart");
    let region = region.current();
    cart.with_cart(|c| CartResponse::snapshot(c, region))
}

/// Proposes a candidate to the cart.
///
/// ## Behavior
/// - Structurally invalid: rejected with `VALIDATION_ERROR`, cart unchanged,
///   failure logged with a sanitized message
/// - Already present (same id): successful no-op, `added: false`
/// - Otherwise: appended at the end, `added: true`
pub fn add_to_cart(
    cart: &CartState,
    region: &RegionState,
    candidate: CartItem,
) -> Result<AddToCartResponse, ApiError> {
    debug!(candidate_id = %candidate.id, "add_to_cart");
    let current_region = region.current();

    let outcome = cart.with_cart_mut(|c| {
        let outcome = c.add(candidate)?;
        Ok::<AddToCartResponse, ApiError>(AddToCartResponse {
            added: outcome == CartAdd::Added,
            cart: CartResponse::snapshot(c, current_region),
        })
    });

    outcome.inspect_err(|err| {
        warn!(
            reason = %sanitize_message(&err.message),
            "rejected cart candidate"
        );
    })
}

/// Removes an item by id. Removing an absent id is a no-op.
pub fn remove_from_cart(cart: &CartState, region: &RegionState, id: &str) -> CartResponse {
    debug!(item_id = %id, "remove_from_cart");
    let current_region = region.current();

    cart.with_cart_mut(|c| {
        let removed = c.remove(id);
        if !removed {
            debug!(item_id = %id, "remove of absent id, nothing to do");
        }
        CartResponse::snapshot(c, current_region)
    })
}

/// Empties the cart unconditionally.
///
/// ## When Used
/// - The "Clear Cart" button in the cart sheet
/// - After the buyer confirms they have paid out-of-band
pub fn clear_cart(cart: &CartState, region: &RegionState) -> CartResponse {
    debug!("clear_cart");
    let current_region = region.current();

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::snapshot(c, current_region)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, price: &str) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: id.to_string(),
            description: format!("{id} subscription"),
            price: price.to_string(),
            original_price: None,
            icon: "🎮".to_string(),
            currency: "USD".to_string(),
            features: None,
        }
    }

    #[test]
    fn test_add_reports_duplicates() {
        let cart = CartState::new();
        let region = RegionState::new();
        region.select(Region::Us);

        let first = add_to_cart(&cart, &region, candidate("A", "$60")).unwrap();
        assert!(first.added);

        let second = add_to_cart(&cart, &region, candidate("A", "$60")).unwrap();
        assert!(!second.added);
        assert_eq!(second.cart.totals.item_count, 1);
    }

    #[test]
    fn test_display_total_uses_region_symbol() {
        let cart = CartState::new();
        let region = RegionState::new();

        region.select(Region::Us);
        add_to_cart(&cart, &region, candidate("A", "$60")).unwrap();
        assert_eq!(get_cart(&cart, &region).totals.display_total, "$60.00");

        region.select(Region::MiddleEast);
        assert_eq!(get_cart(&cart, &region).totals.display_total, "د.ك60.00");
    }

    #[test]
    fn test_display_total_without_region_is_bare() {
        let cart = CartState::new();
        let region = RegionState::new();
        assert_eq!(get_cart(&cart, &region).totals.display_total, "0.00");
    }

    #[test]
    fn test_malformed_stored_price_keeps_response_total() {
        let cart = CartState::new();
        let region = RegionState::new();
        region.select(Region::Us);

        add_to_cart(&cart, &region, candidate("A", "$60")).unwrap();
        add_to_cart(&cart, &region, candidate("B", "N/A")).unwrap();

        let snapshot = get_cart(&cart, &region);
        assert_eq!(snapshot.totals.item_count, 2);
        assert_eq!(snapshot.totals.total, 60.0);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let cart = CartState::new();
        let region = RegionState::new();
        region.select(Region::Us);

        add_to_cart(&cart, &region, candidate("A", "$60")).unwrap();
        let snapshot = remove_from_cart(&cart, &region, "not-there");
        assert_eq!(snapshot.totals.item_count, 1);
    }

    /// The response DTO is the UI's wire contract.
    #[test]
    fn test_cart_response_wire_shape() {
        let cart = CartState::new();
        let region = RegionState::new();
        region.select(Region::Us);

        let response = add_to_cart(&cart, &region, candidate("A", "$60")).unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["added"], true);
        assert_eq!(json["cart"]["totals"]["itemCount"], 1);
        assert_eq!(json["cart"]["totals"]["displayTotal"], "$60.00");
    }
}
