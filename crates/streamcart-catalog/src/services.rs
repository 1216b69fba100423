//! # Service Catalogs
//!
//! The fixed per-region service tables and the IPTV bundle offer.
//!
//! ## Pricing Model
//! Each table row carries the bare numeral ("60", "7.5"); the public
//! functions glue the region's currency symbol on the front so the cart
//! receives display strings exactly as the UI shows them ("$60", "د.ك7.5").
//! The pre-discount price gets the same treatment.
//!
//! ## Identity
//! `id` is the display name. That makes the name the deduplication key: a
//! service can be in the cart at most once, and the two Xbox Game Pass
//! durations count as distinct services because their names differ.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use streamcart_core::types::{CartItem, Region};

// =============================================================================
// Catalog Entry
// =============================================================================

/// One sellable service as presented on the catalog grid.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// The CartItem-shaped candidate, ready to propose to the cart.
    pub item: CartItem,

    /// Highlight flag for the "Most Popular" badge (display only).
    pub popular: bool,
}

// =============================================================================
// Raw Tables
// =============================================================================

/// A raw catalog row before region formatting is applied.
struct ServiceRow {
    name: &'static str,
    description: &'static str,
    price: &'static str,
    original_price: Option<&'static str>,
    icon: &'static str,
    features: &'static [&'static str],
    popular: bool,
}

const US_SERVICES: &[ServiceRow] = &[
    ServiceRow {
        name: "YouTube Premium",
        description: "Ad-free videos, background play, YouTube Music",
        price: "60",
        original_price: Some("140"),
        icon: "📺",
        features: &[
            "Ad-free viewing",
            "Background play",
            "YouTube Music Premium",
            "Download videos",
        ],
        popular: true,
    },
    ServiceRow {
        name: "Spotify Premium",
        description: "High-quality music streaming",
        price: "50",
        original_price: Some("120"),
        icon: "🎵",
        features: &[
            "High-quality audio",
            "Offline downloads",
            "No ads",
            "Unlimited skips",
        ],
        popular: false,
    },
    ServiceRow {
        name: "Watch It",
        description: "Premium entertainment streaming",
        price: "50",
        original_price: Some("99"),
        icon: "🎬",
        features: &[
            "HD/4K streaming",
            "Multiple devices",
            "Offline viewing",
            "Exclusive content",
        ],
        popular: false,
    },
    ServiceRow {
        name: "Shahid VIP",
        description: "Arabic premium content",
        price: "60",
        original_price: Some("92"),
        icon: "🎭",
        features: &[
            "Arabic shows & movies",
            "Live TV",
            "Sports content",
            "Kids content",
        ],
        popular: false,
    },
    ServiceRow {
        name: "Crunchyroll MEGA FAN",
        description: "Premium anime streaming",
        price: "50",
        original_price: Some("120"),
        icon: "🍜",
        features: &[
            "Ad-free anime",
            "Simulcast episodes",
            "Manga access",
            "Offline viewing",
        ],
        popular: false,
    },
    ServiceRow {
        name: "Snapchat+",
        description: "Enhanced Snapchat experience",
        price: "15",
        original_price: Some("30"),
        icon: "👻",
        features: &[
            "Custom app icons",
            "Rewatch stories",
            "Pin friends",
            "Exclusive features",
        ],
        popular: false,
    },
    ServiceRow {
        name: "Prime Video",
        description: "Amazon Prime streaming",
        price: "70",
        original_price: Some("140"),
        icon: "🎬",
        features: &[
            "HD/4K streaming",
            "Original content",
            "Multiple devices",
            "Exclusive shows",
        ],
        popular: false,
    },
    ServiceRow {
        name: "Xbox Game Pass Ultimate (3 Months)",
        description: "Premium gaming subscription service",
        price: "30",
        original_price: Some("45"),
        icon: "🎮",
        features: &[
            "100+ games",
            "Online multiplayer",
            "PC & Console",
            "Cloud gaming",
        ],
        popular: false,
    },
    ServiceRow {
        name: "Xbox Game Pass Ultimate (6 Months)",
        description: "Premium gaming subscription service",
        price: "60",
        original_price: Some("90"),
        icon: "🎮",
        features: &[
            "100+ games",
            "Online multiplayer",
            "PC & Console",
            "Cloud gaming",
        ],
        popular: true,
    },
    ServiceRow {
        name: "Xbox Game Pass Ultimate (12 Months)",
        description: "Premium gaming subscription service",
        price: "120",
        original_price: Some("180"),
        icon: "🎮",
        features: &[
            "100+ games",
            "Online multiplayer",
            "PC & Console",
            "Cloud gaming",
        ],
        popular: false,
    },
];

const MIDDLE_EAST_SERVICES: &[ServiceRow] = &[
    ServiceRow {
        name: "Crunchyroll",
        description: "Premium anime streaming",
        price: "7.5",
        original_price: Some("15"),
        icon: "🍜",
        features: &[
            "Ad-free anime",
            "Simulcast episodes",
            "Manga access",
            "Offline viewing",
        ],
        popular: false,
    },
    ServiceRow {
        name: "YouTube Premium",
        description: "Ad-free videos, background play",
        price: "12",
        original_price: Some("26"),
        icon: "📺",
        features: &[
            "Ad-free viewing",
            "Background play",
            "YouTube Music Premium",
            "Download videos",
        ],
        popular: true,
    },
    ServiceRow {
        name: "Spotify Premium",
        description: "High-quality music streaming",
        price: "6",
        original_price: Some("15"),
        icon: "🎵",
        features: &[
            "High-quality audio",
            "Offline downloads",
            "No ads",
            "Unlimited skips",
        ],
        popular: false,
    },
    ServiceRow {
        name: "Prime Video",
        description: "Amazon Prime streaming",
        price: "5",
        original_price: Some("15"),
        icon: "🎬",
        features: &[
            "HD/4K streaming",
            "Original content",
            "Multiple devices",
            "Exclusive shows",
        ],
        popular: false,
    },
    ServiceRow {
        name: "Watch It",
        description: "Premium entertainment streaming",
        price: "13",
        original_price: Some("30"),
        icon: "🎭",
        features: &[
            "Arabic shows & movies",
            "Live TV",
            "Sports content",
            "Kids content",
        ],
        popular: false,
    },
    ServiceRow {
        name: "Shahid VIP",
        description: "Arabic premium content",
        price: "12",
        original_price: Some("28"),
        icon: "🎪",
        features: &[
            "Arabic shows & movies",
            "Live TV",
            "Sports content",
            "Kids content",
        ],
        popular: false,
    },
];

/// Stable id of the IPTV bundle offer. A single literal shared by both
/// regions, so the dedup key does not depend on which market built the item.
const IPTV_OFFER_ID: &str = "NovaTV IPTV Service";

// =============================================================================
// Public Surface
// =============================================================================

/// The service cards offered in a region, in catalog order.
pub fn services_for(region: Region) -> Vec<CatalogEntry> {
    let rows = match region {
        Region::Us => US_SERVICES,
        Region::MiddleEast => MIDDLE_EAST_SERVICES,
    };

    rows.iter()
        .map(|row| CatalogEntry {
            item: to_cart_item(row, region),
            popular: row.popular,
        })
        .collect()
}

/// The synthetic IPTV bundle offer for a region.
///
/// Unlike the grid services, this candidate is constructed directly (the UI
/// shows it in its own panel) - but it is still just a CartItem proposal and
/// goes through the same gate on add.
pub fn iptv_offer(region: Region) -> CartItem {
    let numeral = match region {
        Region::Us => "30",
        Region::MiddleEast => "9",
    };

    CartItem {
        id: IPTV_OFFER_ID.to_string(),
        name: IPTV_OFFER_ID.to_string(),
        description: "Premium 4K IPTV with global channels".to_string(),
        price: format!("{}{}", region.currency_symbol(), numeral),
        original_price: None,
        icon: "📺".to_string(),
        currency: region.currency_code().to_string(),
        features: None,
    }
}

fn to_cart_item(row: &ServiceRow, region: Region) -> CartItem {
    let symbol = region.currency_symbol();

    CartItem {
        id: row.name.to_string(),
        name: row.name.to_string(),
        description: row.description.to_string(),
        price: format!("{symbol}{}", row.price),
        original_price: row
            .original_price
            .map(|numeral| format!("{symbol}{numeral}")),
        icon: row.icon.to_string(),
        currency: region.currency_code().to_string(),
        features: Some(row.features.iter().map(|f| f.to_string()).collect()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use streamcart_core::validation::validate_cart_item;

    #[test]
    fn test_both_regions_have_services() {
        assert_eq!(services_for(Region::Us).len(), 10);
        assert_eq!(services_for(Region::MiddleEast).len(), 6);
    }

    /// Catalog data is trusted, but it must at least pass its own gate -
    /// otherwise every add would silently fail.
    #[test]
    fn test_every_entry_passes_the_cart_gate() {
        for region in [Region::Us, Region::MiddleEast] {
            for entry in services_for(region) {
                validate_cart_item(&entry.item).unwrap();
            }
            validate_cart_item(&iptv_offer(region)).unwrap();
        }
    }

    #[test]
    fn test_prices_carry_region_symbol() {
        for entry in services_for(Region::Us) {
            assert!(entry.item.price.starts_with('$'), "{}", entry.item.price);
        }
        for entry in services_for(Region::MiddleEast) {
            assert!(
                entry.item.price.starts_with("د.ك"),
                "{}",
                entry.item.price
            );
        }
    }

    #[test]
    fn test_ids_unique_within_region() {
        for region in [Region::Us, Region::MiddleEast] {
            let mut ids: Vec<String> = services_for(region)
                .into_iter()
                .map(|e| e.item.id)
                .collect();
            ids.push(iptv_offer(region).id);

            let mut deduped = ids.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(ids.len(), deduped.len());
        }
    }

    #[test]
    fn test_iptv_offer_id_stable_across_regions() {
        assert_eq!(iptv_offer(Region::Us).id, iptv_offer(Region::MiddleEast).id);
        assert_eq!(iptv_offer(Region::Us).price, "$30");
        assert_eq!(iptv_offer(Region::MiddleEast).price, "د.ك9");
    }

    #[test]
    fn test_parsed_catalog_prices_are_positive() {
        use streamcart_core::price::parse_display_price;

        for region in [Region::Us, Region::MiddleEast] {
            for entry in services_for(region) {
                assert!(parse_display_price(&entry.item.price).unwrap() > 0.0);
            }
        }
    }
}
