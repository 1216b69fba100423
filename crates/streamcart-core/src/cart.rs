//! # Cart Store
//!
//! The authoritative, ordered, deduplicated collection of accepted items for
//! one browsing session.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Store Operations                              │
//! │                                                                         │
//! │  UI Action               Operation               State Change           │
//! │  ─────────               ─────────               ────────────           │
//! │                                                                         │
//! │  Click "Add to Cart" ──► add(item) ────────────► validate → dedup →     │
//! │                                                  items.push(item)       │
//! │                                                                         │
//! │  Click trash icon ─────► remove(id) ───────────► items.retain(..)       │
//! │                                                                         │
//! │  Click "Clear Cart" ───► clear() ──────────────► items.clear()          │
//! │                                                                         │
//! │  Render total ─────────► total() ──────────────► (read only, parses     │
//! │                                                   each display price)   │
//! │                                                                         │
//! │  Render badge ─────────► item_count() ─────────► (read only)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by `id`; adding a duplicate is an idempotent no-op
//! - Every stored item has passed [`validate_cart_item`]; nothing
//!   structurally invalid is ever held
//! - Insertion order is preserved: append-only until explicit removal
//! - Every operation is total - no panic, no unhandled fault, for any input

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::error::ValidationError;
use crate::price::parse_display_price;
use crate::types::CartItem;
use crate::validation::validate_cart_item;

// =============================================================================
// Add Outcome
// =============================================================================

/// What happened to an accepted candidate.
///
/// A duplicate add is a success, not an error: the cart is unchanged and the
/// caller may (but does not have to) surface an "already in cart" notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAdd {
    /// The candidate was appended to the cart.
    Added,
    /// An item with the same id was already present; nothing changed.
    AlreadyPresent,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart for one browsing session.
///
/// ## Lifecycle
/// Constructed empty when the session starts, mutated only through
/// [`Cart::add`], [`Cart::remove`] and [`Cart::clear`], dropped with the
/// session. There is no persistence; items enter only through [`Cart::add`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Accepted items, in insertion order.
    items: Vec<CartItem>,

    /// When the cart was created or last cleared.
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Validates a candidate and, if it passes, appends it unless an item
    /// with the same id is already present.
    ///
    /// ## Behavior
    /// - Structural failure: `Err(ValidationError)`, cart unchanged
    /// - Duplicate id: `Ok(CartAdd::AlreadyPresent)`, cart unchanged
    /// - Otherwise: `Ok(CartAdd::Added)`, item appended at the end
    ///
    /// ## Example
    /// ```rust
    /// use streamcart_core::cart::{Cart, CartAdd};
    /// use streamcart_core::types::CartItem;
    ///
    /// let offer = CartItem {
    ///     id: "Snapchat+".to_string(),
    ///     name: "Snapchat+".to_string(),
    ///     description: "Enhanced Snapchat experience".to_string(),
    ///     price: "$15".to_string(),
    ///     original_price: None,
    ///     icon: "👻".to_string(),
    ///     currency: "USD".to_string(),
    ///     features: None,
    /// };
    ///
    /// let mut cart = Cart::new();
    /// assert_eq!(cart.add(offer.clone()).unwrap(), CartAdd::Added);
    /// assert_eq!(cart.add(offer).unwrap(), CartAdd::AlreadyPresent);
    /// assert_eq!(cart.item_count(), 1);
    /// ```
    pub fn add(&mut self, candidate: CartItem) -> Result<CartAdd, ValidationError> {
        validate_cart_item(&candidate)?;

        if self.contains(&candidate.id) {
            return Ok(CartAdd::AlreadyPresent);
        }

        self.items.push(candidate);
        Ok(CartAdd::Added)
    }

    /// Removes the item with the given id, if present.
    ///
    /// Returns whether anything was removed. Removing an absent id is a
    /// no-op, never an error.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Empties the cart unconditionally and restarts its bookkeeping clock.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Computes the cart total by parsing each item's display price.
    ///
    /// ## Degradation Contract
    /// An item whose price fails to parse contributes **zero**; the failure
    /// is logged at `warn` and the rest of the sum proceeds. The result is
    /// always a finite, non-negative number - zero for an empty cart - and
    /// independent of item order.
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|item| match parse_display_price(&item.price) {
                Ok(amount) => amount,
                Err(err) => {
                    warn!(item_id = %item.id, error = %err, "treating unparseable price as zero");
                    0.0
                }
            })
            .sum()
    }

    /// Number of items currently in the cart.
    ///
    /// One slot per item - this catalog has no quantity concept.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Read-only snapshot of the current items, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Checks whether an item with the given id is in the cart.
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: &str) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: id.to_string(),
            description: format!("{id} subscription"),
            price: price.to_string(),
            original_price: None,
            icon: "📺".to_string(),
            currency: "USD".to_string(),
            features: None,
        }
    }

    #[test]
    fn test_add_and_count() {
        let mut cart = Cart::new();
        cart.add(item("A", "$60")).unwrap();
        cart.add(item("B", "$50")).unwrap();

        assert_eq!(cart.item_count(), 2);
        assert!(!cart.is_empty());
    }

    #[test]
    fn test_duplicate_add_is_idempotent() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(item("A", "$60")).unwrap(), CartAdd::Added);
        assert_eq!(
            cart.add(item("A", "$60")).unwrap(),
            CartAdd::AlreadyPresent
        );

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items().iter().filter(|i| i.id == "A").count(), 1);
    }

    #[test]
    fn test_invalid_candidate_never_stored() {
        let mut cart = Cart::new();

        assert!(cart.add(item("", "$60")).is_err());

        let mut long_name = item("B", "$50");
        long_name.name = "x".repeat(101);
        assert!(cart.add(long_name).is_err());

        let mut no_price = item("C", "");
        no_price.price = String::new();
        assert!(cart.add(no_price).is_err());

        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new();
        cart.add(item("A", "$60")).unwrap();

        assert!(cart.remove("A"));
        assert!(!cart.remove("A"));
        assert!(!cart.remove("never-added"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_is_total() {
        let mut cart = Cart::new();
        cart.add(item("A", "$60")).unwrap();
        cart.add(item("B", "د.ك9")).unwrap();

        cart.clear();

        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_total_mixed_currencies() {
        let mut cart = Cart::new();
        cart.add(item("A", "$60")).unwrap();
        cart.add(item("B", "د.ك9")).unwrap();

        assert_eq!(cart.total(), 69.0);
    }

    #[test]
    fn test_malformed_price_degrades_to_zero() {
        let mut cart = Cart::new();
        cart.add(item("A", "$60")).unwrap();
        cart.add(item("B", "N/A")).unwrap();

        // "N/A" passes the structural gate (non-empty) but fails the parse;
        // it must contribute zero, not poison the sum.
        assert_eq!(cart.total(), 60.0);
    }

    #[test]
    fn test_total_is_order_independent() {
        let mut forward = Cart::new();
        forward.add(item("A", "$60")).unwrap();
        forward.add(item("B", "د.ك9")).unwrap();
        forward.add(item("C", "$12.50")).unwrap();

        let mut backward = Cart::new();
        backward.add(item("C", "$12.50")).unwrap();
        backward.add(item("B", "د.ك9")).unwrap();
        backward.add(item("A", "$60")).unwrap();

        assert_eq!(forward.total(), backward.total());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(item("first", "$1")).unwrap();
        cart.add(item("second", "$2")).unwrap();
        cart.add(item("third", "$3")).unwrap();
        cart.remove("second");

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "third"]);
    }

    /// The end-to-end scenario: two regions' items plus a duplicate add,
    /// then a removal.
    #[test]
    fn test_checkout_scenario() {
        let mut cart = Cart::new();
        cart.add(item("A", "$60")).unwrap();
        cart.add(item("B", "د.ك9")).unwrap();
        cart.add(item("A", "$60")).unwrap(); // duplicate, no-op

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), 69.0);

        cart.remove("A");
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total(), 9.0);
    }
}
