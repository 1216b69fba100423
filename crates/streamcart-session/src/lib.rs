//! # StreamCart Session Library
//!
//! The boundary the storefront UI drives. One value of each state type is
//! constructed per browsing session and handed (by cheap clone) to whatever
//! UI callbacks need it - never reached through ambient global state.
//!
//! ## Module Organization
//! ```text
//! streamcart_session/
//! ├── lib.rs          ◄─── You are here (logging setup & exports)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart state handle
//! │   └── region.rs   ◄─── Selected-region state handle
//! ├── api/
//! │   ├── mod.rs      ◄─── Operation exports
//! │   ├── region.rs   ◄─── Region picker operations
//! │   ├── catalog.rs  ◄─── Catalog retrieval
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   └── payment.rs  ◄─── Payment channel details
//! └── error.rs        ◄─── Serializable boundary error + log sanitizer
//! ```
//!
//! ## Failure Policy
//! No operation here panics on user input or lets a core error escape as an
//! unhandled fault. Rejected adds come back as a serializable [`ApiError`];
//! everything else is defined as a no-op or a degraded (zero) contribution.
//!
//! ## Example Usage
//!
//! ```rust
//! use streamcart_core::types::Region;
//! use streamcart_session::api;
//! use streamcart_session::state::{CartState, RegionState};
//!
//! let cart = CartState::new();
//! let region = RegionState::new();
//!
//! api::select_region(&region, Region::Us);
//! let catalog = api::get_catalog(&region).unwrap();
//! let response = api::add_to_cart(&cart, &region, catalog.iptv_offer).unwrap();
//!
//! assert!(response.added);
//! assert_eq!(response.cart.totals.item_count, 1);
//! ```

pub mod api;
pub mod error;
pub mod state;

pub use error::{ApiError, ErrorCode};

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// Call once from the embedding shell before the first operation.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=streamcart=trace` - Trace the storefront crates only
/// - Default: INFO, with DEBUG for the streamcart crates
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,streamcart=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
