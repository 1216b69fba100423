//! # Cart State
//!
//! The session's handle to its cart.
//!
//! ## Ownership Model
//! The handle is constructed once when the session starts and cloned into
//! whichever UI callbacks need it. Clones share the same underlying cart;
//! dropping the last clone drops the cart. This replaces the
//! reach-it-from-anywhere context of a typical frontend cart hook with
//! explicit dependency injection, which keeps the core testable without any
//! UI framework in sight.

use std::sync::{Arc, Mutex};

use streamcart_core::cart::Cart;

/// Shared handle to one session's cart.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Cart>>`:
/// - `Arc`: clones of the handle share one cart
/// - `Mutex`: each operation gets exclusive access for its short critical
///   section, so every call observes the fully settled result of the
///   previous one
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a handle to a new empty cart.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = cart_state.with_cart(|cart| cart.item_count());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add(candidate))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streamcart_core::types::CartItem;

    fn offer(id: &str) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: id.to_string(),
            description: "test offer".to_string(),
            price: "$10".to_string(),
            original_price: None,
            icon: "🎬".to_string(),
            currency: "USD".to_string(),
            features: None,
        }
    }

    #[test]
    fn test_clones_share_one_cart() {
        let state = CartState::new();
        let handle = state.clone();

        state
            .with_cart_mut(|cart| cart.add(offer("A")))
            .unwrap();

        assert_eq!(handle.with_cart(|cart| cart.item_count()), 1);
    }
}
