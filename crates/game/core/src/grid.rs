//! Axis-aligned placement geometry for the fixed inventory grid.
//!
//! Cell size and rendering are presentation concerns; everything here works
//! in whole grid cells. Boxes that merely share an edge do not overlap.

use crate::config::GameConfig;
use crate::state::{Inventory, ItemId, Position};

/// An item footprint anchored at its top-left cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBox {
    pub x: u8,
    pub y: u8,
    pub width: u8,
    pub height: u8,
}

impl GridBox {
    pub fn new(x: u8, y: u8, width: u8, height: u8) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Strict-inequality AABB test: zero-area intersections (edge or corner
    /// contact) count as free. Widened arithmetic so positions near u8::MAX
    /// cannot wrap.
    pub fn overlaps(&self, other: &GridBox) -> bool {
        let (ax, ay, aw, ah) = self.widened();
        let (bx, by, bw, bh) = other.widened();
        ax < bx + bw && ax + aw > bx && ay < by + bh && ay + ah > by
    }

    /// Whether the box lies fully within `[0, columns) x [0, rows)`.
    pub fn in_bounds(&self, config: &GameConfig) -> bool {
        let (x, y, w, h) = self.widened();
        x + w <= u16::from(config.columns) && y + h <= u16::from(config.rows)
    }

    fn widened(&self) -> (u16, u16, u16, u16) {
        (
            u16::from(self.x),
            u16::from(self.y),
            u16::from(self.width),
            u16::from(self.height),
        )
    }
}

/// Returns the first item whose footprint collides with `candidate`,
/// excluding `exclude` (the item being moved or rotated) from the test.
pub fn collision(
    inventory: &Inventory,
    exclude: Option<ItemId>,
    candidate: &GridBox,
) -> Option<ItemId> {
    inventory
        .iter()
        .filter(|item| Some(item.id) != exclude)
        .find(|item| candidate.overlaps(&item.grid_box()))
        .map(|item| item.id)
}

/// Scans candidate top-left positions in row-major order (y outer, x inner,
/// both ascending) and returns the first slot where a `width` x `height` box
/// fits without colliding. Deterministic: callers wanting variety must
/// randomize *what* they place, never *where*.
pub fn find_empty_slot(
    inventory: &Inventory,
    width: u8,
    height: u8,
    config: &GameConfig,
) -> Option<Position> {
    let max_y = config.rows.checked_sub(height)?;
    let max_x = config.columns.checked_sub(width)?;
    for y in 0..=max_y {
        for x in 0..=max_x {
            let candidate = GridBox::new(x, y, width, height);
            if collision(inventory, None, &candidate).is_none() {
                return Some(Position::new(x, y));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DefinitionId, PlacedItem};

    fn item(id: u64, x: u8, y: u8, w: u8, h: u8) -> PlacedItem {
        PlacedItem {
            id: ItemId(id),
            position: Position::new(x, y),
            width: w,
            height: h,
            name: "crate".into(),
            sprite: "crate_1x1".into(),
            price: 10,
            definition: DefinitionId::new("crate"),
            premium: false,
        }
    }

    fn inventory(items: Vec<PlacedItem>) -> Inventory {
        let mut inv = Inventory::default();
        for it in items {
            inv.push(it);
        }
        inv
    }

    #[test]
    fn edge_contact_is_not_overlap() {
        let a = GridBox::new(0, 0, 1, 1);
        let b = GridBox::new(1, 0, 1, 1);
        let c = GridBox::new(1, 1, 1, 1);
        assert!(!a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(a.overlaps(&GridBox::new(0, 0, 2, 2)));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = GridBox::new(1, 1, 2, 2);
        let b = GridBox::new(2, 2, 2, 1);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn bounds_respect_footprint() {
        let config = GameConfig::default();
        assert!(GridBox::new(6, 0, 2, 1).in_bounds(&config));
        assert!(!GridBox::new(7, 0, 2, 1).in_bounds(&config));
        assert!(!GridBox::new(0, 7, 1, 2).in_bounds(&config));
    }

    #[test]
    fn empty_slot_scans_row_major() {
        let config = GameConfig::default();
        let inv = inventory(vec![item(1, 0, 0, 1, 1), item(2, 1, 0, 1, 1)]);
        assert_eq!(
            find_empty_slot(&inv, 1, 1, &config),
            Some(Position::new(2, 0))
        );
    }

    #[test]
    fn wide_item_skips_blocked_row_prefix() {
        let config = GameConfig::default();
        // A 1x1 at (3,0) forces the 2x2 candidate past it on row 0.
        let inv = inventory(vec![item(1, 3, 0, 1, 1)]);
        assert_eq!(
            find_empty_slot(&inv, 2, 2, &config),
            Some(Position::new(0, 0))
        );
        let inv = inventory(vec![item(1, 0, 0, 1, 1)]);
        assert_eq!(
            find_empty_slot(&inv, 2, 2, &config),
            Some(Position::new(1, 0))
        );
    }

    #[test]
    fn full_grid_has_no_slot() {
        let config = GameConfig::default();
        let mut items = Vec::new();
        let mut next = 1;
        for y in 0..8 {
            for x in 0..8 {
                items.push(item(next, x, y, 1, 1));
                next += 1;
            }
        }
        let inv = inventory(items);
        assert_eq!(find_empty_slot(&inv, 1, 1, &config), None);
    }

    #[test]
    fn oversized_footprint_has_no_slot() {
        let config = GameConfig::default();
        let inv = Inventory::default();
        assert_eq!(find_empty_slot(&inv, 9, 1, &config), None);
        assert_eq!(find_empty_slot(&inv, 1, 9, &config), None);
    }

    #[test]
    fn collision_excludes_the_moving_item() {
        let inv = inventory(vec![item(1, 0, 0, 2, 2)]);
        let own_box = GridBox::new(0, 0, 2, 2);
        assert_eq!(collision(&inv, Some(ItemId(1)), &own_box), None);
        assert_eq!(collision(&inv, None, &own_box), Some(ItemId(1)));
    }
}
