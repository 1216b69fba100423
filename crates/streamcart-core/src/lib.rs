//! # streamcart-core: Pure Business Logic for StreamCart
//!
//! This crate is the **heart** of the StreamCart storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      StreamCart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront UI (external)                        │   │
//! │  │    Region Picker ──► Catalog Grid ──► Cart Sheet ──► Payment   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ DTO surface                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                   streamcart-session                            │   │
//! │  │    select_region, get_catalog, add_to_cart, get_cart, ...      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ streamcart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   price   │  │   cart    │  │ validation│  │   │
//! │  │   │  Region   │  │  display  │  │   Cart    │  │   rules   │  │   │
//! │  │   │ CartItem  │  │  parsing  │  │  CartAdd  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO UI • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Region, CartItem)
//! - [`price`] - Display-price parsing (mixed currency symbol formats)
//! - [`cart`] - The cart store (ordered, deduplicated, total computation)
//! - [`validation`] - Structural item validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Logic**: No state beyond the cart a function is called on
//!    (the only clock read is the cart's bookkeeping timestamp)
//! 2. **No I/O**: Network, file system, and UI access is FORBIDDEN here
//! 3. **Total Operations**: Every cart operation has a defined, non-panicking
//!    outcome - a malformed price degrades to zero, a duplicate add is a no-op
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use streamcart_core::cart::Cart;
//! use streamcart_core::types::CartItem;
//!
//! let mut cart = Cart::new();
//! cart.add(CartItem {
//!     id: "YouTube Premium".to_string(),
//!     name: "YouTube Premium".to_string(),
//!     description: "Ad-free videos, background play".to_string(),
//!     price: "$60".to_string(),
//!     original_price: Some("$140".to_string()),
//!     icon: "📺".to_string(),
//!     currency: "USD".to_string(),
//!     features: None,
//! }).unwrap();
//!
//! assert_eq!(cart.item_count(), 1);
//! assert_eq!(cart.total(), 60.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod price;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use streamcart_core::Cart` instead of
// `use streamcart_core::cart::Cart`

pub use cart::{Cart, CartAdd};
pub use error::{PriceError, ValidationError};
pub use price::parse_display_price;
pub use types::{CartItem, Region};
pub use validation::validate_cart_item;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of an item name, in characters.
///
/// ## Business Reason
/// Catalog names are short product titles; anything longer is a malformed
/// candidate, not a real offer. Counted in `char`s because the Middle-East
/// catalog carries Arabic text.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of an item description, in characters.
///
/// ## Business Reason
/// Descriptions are one-line blurbs shown on service cards. The cap keeps a
/// runaway candidate from bloating the session cart.
pub const MAX_DESCRIPTION_LEN: usize = 500;
