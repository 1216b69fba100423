//! # Session API Module
//!
//! The operations the storefront UI drives, grouped by concern.
//!
//! ## Operation Organization
//! ```text
//! api/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── region.rs   ◄─── Region picker
//! ├── catalog.rs  ◄─── Catalog retrieval
//! ├── cart.rs     ◄─── Cart manipulation
//! └── payment.rs  ◄─── Payment channel details
//! ```
//!
//! ## How Operations Work
//! Every operation is a plain synchronous function that takes the state
//! handles it needs and returns a serializable DTO (or `ApiError`). The
//! embedding shell decides how those cross to the UI - over an IPC bridge,
//! a WASM boundary, whatever - this crate only fixes the shapes.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Operation Flow                                      │
//! │                                                                         │
//! │  Storefront UI                                                          │
//! │  ─────────────                                                          │
//! │  const res = await bridge('add_to_cart', { candidate });                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Session Layer                                                          │
//! │  ─────────────                                                          │
//! │  pub fn add_to_cart(                                                    │
//! │      cart: &CartState,        ◄── injected handle                      │
//! │      region: &RegionState,    ◄── injected handle                      │
//! │      candidate: CartItem,     ◄── from the bridge payload              │
//! │  ) -> Result<AddToCartResponse, ApiError>                               │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  UI receives: { added, cart: { items, totals } }                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod payment;
mod region;

pub use cart::{add_to_cart, clear_cart, get_cart, remove_from_cart, AddToCartResponse, CartResponse, CartTotals};
pub use catalog::{get_catalog, CatalogResponse};
pub use payment::{get_payment_details, PaymentDetails};
pub use region::{current_region, select_region};

// =============================================================================
// Session Flow Tests
// =============================================================================
