//! Sell-price valuation.
//!
//! There is exactly one valuation function; manual sells and radio orders
//! both go through it, with the order multiplier layered on top by the
//! fulfillment operation.

use crate::config::GameConfig;
use crate::state::PlacedItem;

/// Value credited when the item is sold: the buy-time price, multiplied for
/// premium items.
pub fn sell_price(item: &PlacedItem, config: &GameConfig) -> u32 {
    if item.premium {
        item.price.saturating_mul(config.premium_multiplier)
    } else {
        item.price
    }
}
