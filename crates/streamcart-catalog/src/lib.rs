//! # streamcart-catalog: The Catalog Provider
//!
//! Supplies everything the storefront can sell, keyed by [`Region`]:
//! the per-region service lists, the synthetic IPTV bundle offer, and the
//! region's payment channels and contact handle.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Provider                                   │
//! │                                                                         │
//! │  Region picker resolves a Region                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  services_for(region) ──► Vec<CatalogEntry>  (cards on the grid)        │
//! │  iptv_offer(region) ────► CartItem           (the special-offer panel)  │
//! │  payment_channels(..) ──► Vec<PaymentChannel> (cart sheet, on checkout) │
//! │  contact_handle(..) ────► "@..."             (post-payment contact)     │
//! │                                                                         │
//! │  Every item is CartItem-shaped with id = display name, price already    │
//! │  formatted with the region's currency symbol. The cart gate re-checks   │
//! │  structure on add; this crate does no validation of its own.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod payment;
pub mod services;

pub use payment::{
    contact_handle, is_valid_instagram_handle, payment_channels, payment_instructions,
    PaymentChannel, PaymentMethod,
};
pub use services::{iptv_offer, services_for, CatalogEntry};

// Re-exported so UI-facing callers only need this crate for catalog calls.
pub use streamcart_core::types::{CartItem, Region};
