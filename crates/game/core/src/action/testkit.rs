//! Shared fixtures for operation tests.

use crate::config::GameConfig;
use crate::env::{CatalogOracle, Env, GameEnv, ItemCategory, ItemDefinition, RngOracle};
use crate::state::{DefinitionId, ItemId, PlacedItem, Position, Session};

pub(crate) struct TestCatalog(pub Vec<ItemDefinition>);

impl CatalogOracle for TestCatalog {
    fn definition(&self, id: &DefinitionId) -> Option<&ItemDefinition> {
        self.0.iter().find(|d| &d.id == id)
    }

    fn definition_count(&self) -> usize {
        self.0.len()
    }

    fn definition_at(&self, index: usize) -> Option<&ItemDefinition> {
        self.0.get(index)
    }
}

/// Scripted random source: every draw yields the same raw value, so
/// `pick_index` selects `value % len`.
pub(crate) struct FixedRng(pub u32);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

pub(crate) fn def(id: &str, w: u8, h: u8, price: u32, category: ItemCategory) -> ItemDefinition {
    ItemDefinition {
        id: DefinitionId::new(id),
        width: w,
        height: h,
        sprite: format!("{id}_{w}x{h}"),
        name: id.to_owned(),
        base_price: price,
        category,
        description: String::new(),
    }
}

pub(crate) struct TestWorld {
    pub catalog: TestCatalog,
    pub rng: FixedRng,
    pub config: GameConfig,
}

impl TestWorld {
    pub fn new(definitions: Vec<ItemDefinition>) -> Self {
        Self {
            catalog: TestCatalog(definitions),
            rng: FixedRng(0),
            config: GameConfig::default(),
        }
    }

    pub fn env(&self) -> GameEnv<'_> {
        Env::with_all(&self.catalog, &self.rng, &self.config).as_game_env()
    }

    pub fn session(&self) -> Session {
        Session::new(7, &self.config)
    }
}

/// Places an instance of `definition` directly into the session, bypassing
/// the buy draw, for scenarios that need exact grid layouts.
pub(crate) fn place(
    session: &mut Session,
    definition: &ItemDefinition,
    x: u8,
    y: u8,
) -> ItemId {
    let id = session.allocate_item_id();
    session.inventory.push(PlacedItem {
        id,
        position: Position::new(x, y),
        width: definition.width,
        height: definition.height,
        name: definition.name.clone(),
        sprite: definition.sprite.clone(),
        price: definition.base_price,
        definition: definition.id.clone(),
        premium: false,
    });
    id
}
