//! # Catalog Operations
//!
//! Hands the UI everything it needs to render the storefront for the
//! selected region: the service grid, the IPTV special-offer panel, and the
//! currency labels.

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::RegionState;
use streamcart_catalog::{iptv_offer, services_for, CatalogEntry};
use streamcart_core::types::{CartItem, Region};

/// Everything on the catalog page, for one region.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub region: Region,

    /// ISO 4217 code shown next to prices, e.g. "USD".
    pub currency_code: String,

    /// Symbol prefixed to display prices, e.g. "$" or "د.ك".
    pub currency_symbol: String,

    /// The service cards, in catalog order.
    pub services: Vec<CatalogEntry>,

    /// The IPTV bundle shown in its own special-offer panel.
    pub iptv_offer: CartItem,
}

/// Fetches the catalog for the selected region.
///
/// ## Errors
/// `REGION_NOT_SELECTED` if the picker has not run yet - the UI shows the
/// picker instead of an empty grid.
pub fn get_catalog(region_state: &RegionState) -> Result<CatalogResponse, ApiError> {
    let region = region_state
        .current()
        .ok_or_else(ApiError::region_not_selected)?;

    debug!(?region, "get_catalog");

    Ok(CatalogResponse {
        region,
        currency_code: region.currency_code().to_string(),
        currency_symbol: region.currency_symbol().to_string(),
        services: services_for(region),
        iptv_offer: iptv_offer(region),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_requires_region() {
        let state = RegionState::new();
        let err = get_catalog(&state).unwrap_err();
        assert_eq!(err.code, ErrorCode::RegionNotSelected);
    }

    #[test]
    fn test_catalog_follows_region() {
        let state = RegionState::new();

        state.select(Region::Us);
        let us = get_catalog(&state).unwrap();
        assert_eq!(us.currency_code, "USD");
        assert_eq!(us.services.len(), 10);
        assert_eq!(us.iptv_offer.price, "$30");

        state.select(Region::MiddleEast);
        let me = get_catalog(&state).unwrap();
        assert_eq!(me.currency_code, "KWD");
        assert_eq!(me.services.len(), 6);
        assert_eq!(me.iptv_offer.price, "د.ك9");
    }
}
