//! Authoritative session state.
//!
//! This module owns the data that describes one playthrough: the grid
//! inventory, the currency balance, the discovered-item collection, and the
//! radio barter state. Hosts read this state freely but mutate it
//! exclusively through the engine.
mod collection;
mod inventory;
mod item;
mod radio;

pub use collection::CollectionState;
pub use inventory::Inventory;
pub use item::{DefinitionId, ItemId, PlacedItem, Position};
pub use radio::{RadioOrder, RadioState};

use crate::config::GameConfig;

/// Structural invariants every session must satisfy after any operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    #[error("items {a} and {b} occupy overlapping cells")]
    Overlap { a: ItemId, b: ItemId },

    #[error("item {item} extends past the grid edge")]
    OutOfBounds { item: ItemId },
}

/// Canonical snapshot of one playthrough.
///
/// Exactly one session is live per game. Everything in here round-trips
/// through persistence, including the id allocator and the RNG bookkeeping,
/// so a reloaded session continues exactly where it left off.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    /// Base seed for deterministic catalog draws.
    ///
    /// Set once at session creation and preserved across resets; combined
    /// with `nonce` to derive a fresh seed for every draw.
    pub game_seed: u64,

    /// Operation counter, incremented by the engine on every execution
    /// attempt so that repeated draws never see the same seed.
    pub nonce: u64,

    /// Sequential instance-id allocator. Never reused.
    next_item_id: u64,

    /// Items currently on the grid.
    pub inventory: Inventory,

    /// Currency balance. Debits are validated up front, so this never
    /// underflows.
    pub balance: u32,

    /// Discovered catalog identities.
    pub collection: CollectionState,

    /// Barter unlock flag and active order.
    pub radio: RadioState,
}

impl Session {
    /// Creates a fresh session with default values from the config.
    pub fn new(game_seed: u64, config: &GameConfig) -> Self {
        Self {
            game_seed,
            nonce: 0,
            next_item_id: 1,
            inventory: Inventory::default(),
            balance: config.starting_balance,
            collection: CollectionState::default(),
            radio: RadioState::default(),
        }
    }

    /// Allocates a new unique [`ItemId`].
    ///
    /// # Panics
    ///
    /// Panics if the 64-bit id space is exhausted, which no reachable game
    /// can do.
    pub fn allocate_item_id(&mut self) -> ItemId {
        let id = ItemId(self.next_item_id);
        self.next_item_id = self.next_item_id.checked_add(1).expect("ItemId overflow");
        id
    }

    /// Verifies the non-overlap and bounds invariants over the whole grid.
    pub fn check_invariants(&self, config: &GameConfig) -> Result<(), InvariantError> {
        let items = self.inventory.items();
        for (index, item) in items.iter().enumerate() {
            if !item.grid_box().in_bounds(config) {
                return Err(InvariantError::OutOfBounds { item: item.id });
            }
            for other in &items[index + 1..] {
                if item.grid_box().overlaps(&other.grid_box()) {
                    return Err(InvariantError::Overlap {
                        a: item.id,
                        b: other.id,
                    });
                }
            }
        }
        Ok(())
    }
}
