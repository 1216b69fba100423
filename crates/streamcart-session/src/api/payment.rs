//! # Payment Detail Operations
//!
//! Serves the cart sheet's payment section: which channels the region
//! supports, where to send the money, and who to contact afterwards.
//! Strictly informational - no processing happens here or anywhere else.

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::RegionState;
use streamcart_catalog::{contact_handle, payment_channels, payment_instructions, PaymentChannel};
use streamcart_core::types::Region;

/// The payment section of the cart sheet, for one region.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub region: Region,

    /// Channels in display order; the UI renders one copyable card each.
    pub channels: Vec<PaymentChannel>,

    /// Instagram handle to contact after paying.
    pub contact_handle: String,

    /// The post-payment instructions line.
    pub instructions: String,
}

/// Fetches the payment details for the selected region.
///
/// ## Errors
/// `REGION_NOT_SELECTED` if the picker has not run yet.
pub fn get_payment_details(region_state: &RegionState) -> Result<PaymentDetails, ApiError> {
    let region = region_state
        .current()
        .ok_or_else(ApiError::region_not_selected)?;

    debug!(?region, "get_payment_details");

    Ok(PaymentDetails {
        region,
        channels: payment_channels(region),
        contact_handle: contact_handle(region).to_string(),
        instructions: payment_instructions(region),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_requires_region() {
        let state = RegionState::new();
        assert_eq!(
            get_payment_details(&state).unwrap_err().code,
            ErrorCode::RegionNotSelected
        );
    }

    #[test]
    fn test_channels_follow_region() {
        let state = RegionState::new();

        state.select(Region::Us);
        let us = get_payment_details(&state).unwrap();
        assert_eq!(us.channels.len(), 2);
        assert_eq!(us.contact_handle, "streamcart.us");

        state.select(Region::MiddleEast);
        let me = get_payment_details(&state).unwrap();
        assert_eq!(me.channels.len(), 1);
        assert!(me.instructions.contains("@streamcart"));
    }
}
