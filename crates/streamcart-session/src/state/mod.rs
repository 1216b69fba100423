//! # State Module
//!
//! Per-session state for the storefront boundary.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, we use
//! separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct/inject individual states
//! 3. **Clearer Operation Signatures**: Operations declare exactly what state they need
//! 4. **Explicit Ownership**: Handles are constructed once per session and
//!    passed to callers - there is no ambient global cart to reach for
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       State Architecture                                │
//! │                                                                         │
//! │  One browsing session constructs:                                       │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────────────────┐  │
//! │  │      CartState       │        │          RegionState             │  │
//! │  │                      │        │                                  │  │
//! │  │  Arc<Mutex<Cart>>    │        │  Arc<Mutex<Option<Region>>>      │  │
//! │  │  with_cart(_mut)     │        │  starts None until the picker    │  │
//! │  └──────────────────────┘        └──────────────────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  Operations are synchronous and serialized by the single UI thread;    │
//! │  the mutexes only exist so clones of a handle can share one session's  │
//! │  state, and each lock is held for one short critical section.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod region;

pub use cart::CartState;
pub use region::RegionState;
