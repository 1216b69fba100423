//! # Region State
//!
//! The session's selected market, `None` until the region picker resolves
//! one. Selecting a region decides which catalog slice, currency symbol and
//! payment channels every later operation sees.

use std::sync::{Arc, Mutex};

use streamcart_core::types::Region;

/// Shared handle to the session's selected region.
#[derive(Debug, Clone)]
pub struct RegionState {
    region: Arc<Mutex<Option<Region>>>,
}

impl RegionState {
    /// Creates a handle with no region selected yet.
    pub fn new() -> Self {
        RegionState {
            region: Arc::new(Mutex::new(None)),
        }
    }

    /// Records the picker's choice. Selecting again switches the market for
    /// subsequent catalog and formatting calls; the cart keeps its items.
    pub fn select(&self, region: Region) {
        let mut current = self.region.lock().expect("Region mutex poisoned");
        *current = Some(region);
    }

    /// The currently selected region, if any.
    pub fn current(&self) -> Option<Region> {
        *self.region.lock().expect("Region mutex poisoned")
    }
}

impl Default for RegionState {
    fn default() -> Self {
        Self::new()
    }
}
