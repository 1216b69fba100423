//! # Region Operations
//!
//! The region picker's boundary: record the chosen market, report the
//! current one. Region selection is resolved entirely out here - the cart
//! core never sees it.

use tracing::debug;

use crate::state::RegionState;
use streamcart_core::types::Region;

/// Records the market the user picked.
///
/// ## When Used
/// - The landing region picker ("United States" / "Middle East")
/// - Switching markets later in the session (catalog and currency follow;
///   items already in the cart keep the prices they were added with)
pub fn select_region(state: &RegionState, region: Region) -> Region {
    debug!(?region, "select_region");
    state.select(region);
    region
}

/// The currently selected market, if the picker has run.
pub fn current_region(state: &RegionState) -> Option<Region> {
    state.current()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_reports_back() {
        let state = RegionState::new();
        assert_eq!(current_region(&state), None);
        assert_eq!(select_region(&state, Region::Us), Region::Us);
        assert_eq!(current_region(&state), Some(Region::Us));
    }
}
