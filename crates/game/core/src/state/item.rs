//! Item identity and placement types.

use std::fmt;

use crate::grid::GridBox;

/// Stable catalog key for an item definition.
///
/// Keys are unique within a catalog and survive persistence round trips, so
/// a reloaded session can always resolve its items back to definitions.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefinitionId(String);

impl DefinitionId {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DefinitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for a placed item instance.
///
/// Allocated by [`Session::allocate_item_id`](super::Session::allocate_item_id)
/// from a monotonically increasing counter and never reused, even after the
/// instance is destroyed by sell, combine, or order fulfillment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position of an item's top-left cell, 0-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// A live item instance sitting on the grid.
///
/// `price`, `name`, and `sprite` are captured from the definition at buy time
/// so the instance stays renderable and sellable even if the catalog changes
/// between sessions. `premium` is the explicit merged-item flag; it triples
/// the sell valuation but leaves price and footprint untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedItem {
    pub id: ItemId,
    pub position: Position,
    pub width: u8,
    pub height: u8,
    pub name: String,
    pub sprite: String,
    pub price: u32,
    pub definition: DefinitionId,
    pub premium: bool,
}

impl PlacedItem {
    /// The footprint currently occupied on the grid.
    pub fn grid_box(&self) -> GridBox {
        GridBox::new(self.position.x, self.position.y, self.width, self.height)
    }
}
