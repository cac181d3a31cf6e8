//! The ordered collection of placed items.

use super::{ItemId, PlacedItem};

/// All items currently on the grid.
///
/// Insertion order is irrelevant to gameplay but stable for UI iteration.
/// Lookups are linear scans by id; at a hard cap of 64 occupied cells an
/// index map would buy nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: Vec<PlacedItem>,
}

impl Inventory {
    pub fn iter(&self) -> impl Iterator<Item = &PlacedItem> {
        self.items.iter()
    }

    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut PlacedItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Appends at the end, preserving iteration order for the UI.
    pub fn push(&mut self, item: PlacedItem) {
        self.items.push(item);
    }

    /// Removes and returns the item, or `None` if the id is unresolvable.
    pub fn remove(&mut self, id: ItemId) -> Option<PlacedItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DefinitionId, Position};

    fn item(id: u64) -> PlacedItem {
        PlacedItem {
            id: ItemId(id),
            position: Position::ORIGIN,
            width: 1,
            height: 1,
            name: "ration".into(),
            sprite: "ration_1x1".into(),
            price: 5,
            definition: DefinitionId::new("ration"),
            premium: false,
        }
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut inv = Inventory::default();
        inv.push(item(1));
        inv.push(item(2));
        inv.push(item(3));

        let removed = inv.remove(ItemId(2)).unwrap();
        assert_eq!(removed.id, ItemId(2));

        let ids: Vec<_> = inv.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![ItemId(1), ItemId(3)]);
    }

    #[test]
    fn remove_unknown_id_is_none() {
        let mut inv = Inventory::default();
        inv.push(item(1));
        assert!(inv.remove(ItemId(9)).is_none());
        assert_eq!(inv.len(), 1);
    }
}
