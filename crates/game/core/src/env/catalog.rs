//! Catalog oracle: read-only access to the static item table.

use crate::state::DefinitionId;

/// Broad gameplay grouping for catalog items.
///
/// Purely descriptive today (the collection UI groups by it); no rule keys
/// off the category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum ItemCategory {
    Food,
    Weapon,
    Medical,
    Utility,
}

/// Immutable description of one purchasable item type.
///
/// Catalogs are validated at load time: dimensions are positive and fit the
/// grid, ids are unique. The rules engine relies on that and never
/// re-validates definitions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: DefinitionId,
    pub width: u8,
    pub height: u8,
    pub sprite: String,
    pub name: String,
    pub base_price: u32,
    pub category: ItemCategory,
    pub description: String,
}

/// Read-only access to item definitions.
///
/// Indexed access exists so uniform random draws can pick
/// `definition_at(rng % definition_count())` without materializing the
/// table. Implementations must keep index order stable for the lifetime of
/// the oracle; draws are replayed from seeds during persistence recovery.
pub trait CatalogOracle: Send + Sync {
    fn definition(&self, id: &DefinitionId) -> Option<&ItemDefinition>;

    fn definition_count(&self) -> usize;

    fn definition_at(&self, index: usize) -> Option<&ItemDefinition>;
}
