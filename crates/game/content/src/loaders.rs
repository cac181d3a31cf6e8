//! Catalog loader for reading item tables from RON files.

use std::path::Path;

use serde::{Deserialize, Serialize};
use stockpile_core::{GameConfig, ItemDefinition};

use crate::Catalog;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and validate an item catalog from a RON file.
    pub fn load(path: &Path, config: &GameConfig) -> LoadResult<Catalog> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))?;
        Self::from_str(&content, config)
    }

    /// Parse and validate an item catalog from RON text.
    pub fn from_str(content: &str, config: &GameConfig) -> LoadResult<Catalog> {
        let file: CatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;
        Catalog::new(file.items, config)
            .map_err(|e| anyhow::anyhow!("Invalid item catalog: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockpile_core::{CatalogOracle, DefinitionId};

    const SAMPLE: &str = r#"(
        items: [
            (
                id: ("ration"),
                width: 1,
                height: 1,
                sprite: "ration_1x1",
                name: "Field Ration",
                base_price: 30,
                category: food,
                description: "Keeps forever.",
            ),
            (
                id: ("crowbar"),
                width: 1,
                height: 2,
                sprite: "crowbar_1x2",
                name: "Crowbar",
                base_price: 85,
                category: weapon,
                description: "Opens doors, one way or another.",
            ),
        ],
    )"#;

    #[test]
    fn parses_a_ron_catalog() {
        let catalog = CatalogLoader::from_str(SAMPLE, &GameConfig::default()).unwrap();
        assert_eq!(catalog.len(), 2);
        let crowbar = catalog.definition(&DefinitionId::new("crowbar")).unwrap();
        assert_eq!((crowbar.width, crowbar.height), (1, 2));
        assert_eq!(crowbar.base_price, 85);
    }

    #[test]
    fn rejects_malformed_ron() {
        let err = CatalogLoader::from_str("(items: [", &GameConfig::default()).unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn rejects_catalogs_that_fail_validation() {
        let doubled = SAMPLE.replace("crowbar", "ration");
        let err = CatalogLoader::from_str(&doubled, &GameConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Invalid item catalog"));
    }
}
