//! Advisory events emitted by successful operations.
//!
//! Events describe what just happened so the presentation layer can trigger
//! sounds, animations, and one-time reveals. They are fire-and-forget: the
//! engine never waits on a consumer, and dropping an event cannot corrupt
//! state.

use crate::env::ItemDefinition;
use crate::state::{ItemId, Position, RadioOrder};

/// What a successful operation did, in presentation-relevant terms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A blind purchase placed a new item on the grid.
    ItemBought { item: ItemId, at: Position },

    /// First acquisition of this catalog identity. Carries the full
    /// definition for the one-time reveal dialog.
    NewDiscovery(ItemDefinition),

    /// A manual sell credited `payout`.
    ItemSold { item: ItemId, payout: u32 },

    ItemMoved { item: ItemId, to: Position },

    ItemRotated { item: ItemId },

    /// `consumed` was destroyed; `upgraded` is now premium.
    ItemsCombined { consumed: ItemId, upgraded: ItemId },

    /// The wealth milestone was crossed for the first time.
    RadioUnlocked,

    /// A new order went live (after unlock and after each fulfillment).
    OrderPosted(RadioOrder),

    /// A matching item was handed over for `payout`.
    OrderFulfilled { item: ItemId, payout: u32 },

    /// The session was replaced with defaults.
    SessionReset,
}
