//! The validated, indexed item table.

use std::collections::HashMap;

use stockpile_core::{CatalogOracle, DefinitionId, GameConfig, ItemDefinition};

/// Catalog construction defects.
///
/// These are startup-time configuration errors: a shipped catalog that
/// trips any of them is broken, and no runtime handling exists beyond
/// refusing to start.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog contains no definitions")]
    Empty,

    #[error("duplicate definition id {0}")]
    DuplicateId(DefinitionId),

    #[error("definition {id} has zero-sized footprint {width}x{height}")]
    ZeroFootprint {
        id: DefinitionId,
        width: u8,
        height: u8,
    },

    #[error("definition {id} footprint {width}x{height} exceeds the {columns}x{rows} grid")]
    FootprintExceedsGrid {
        id: DefinitionId,
        width: u8,
        height: u8,
        columns: u8,
        rows: u8,
    },

    #[error("definition {0} has a non-positive base price")]
    ZeroPrice(DefinitionId),
}

/// Ordered item table with an id index, validated against the grid.
///
/// Index order is the order definitions were supplied in and never changes
/// afterwards; uniform draws depend on that stability.
#[derive(Clone, Debug)]
pub struct Catalog {
    definitions: Vec<ItemDefinition>,
    by_id: HashMap<DefinitionId, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting malformed definitions up front.
    pub fn new(
        definitions: Vec<ItemDefinition>,
        config: &GameConfig,
    ) -> Result<Self, CatalogError> {
        if definitions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut by_id = HashMap::with_capacity(definitions.len());
        for (index, definition) in definitions.iter().enumerate() {
            if definition.width == 0 || definition.height == 0 {
                return Err(CatalogError::ZeroFootprint {
                    id: definition.id.clone(),
                    width: definition.width,
                    height: definition.height,
                });
            }
            if definition.width > config.columns || definition.height > config.rows {
                return Err(CatalogError::FootprintExceedsGrid {
                    id: definition.id.clone(),
                    width: definition.width,
                    height: definition.height,
                    columns: config.columns,
                    rows: config.rows,
                });
            }
            if definition.base_price == 0 {
                return Err(CatalogError::ZeroPrice(definition.id.clone()));
            }
            if by_id.insert(definition.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(definition.id.clone()));
            }
        }

        Ok(Self {
            definitions,
            by_id,
        })
    }

    /// The built-in catalog validated against `config`.
    pub fn builtin(config: &GameConfig) -> Result<Self, CatalogError> {
        Self::new(crate::default_catalog(), config)
    }

    pub fn definitions(&self) -> &[ItemDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl CatalogOracle for Catalog {
    fn definition(&self, id: &DefinitionId) -> Option<&ItemDefinition> {
        self.by_id.get(id).map(|&index| &self.definitions[index])
    }

    fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    fn definition_at(&self, index: usize) -> Option<&ItemDefinition> {
        self.definitions.get(index)
    }
}
