//! Zone loot catalog loader.

use std::collections::BTreeMap;
use std::path::Path;

use game_core::env::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// On-disk shape of the item catalog: loot tables keyed by zone name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneCatalogData {
    pub zones: BTreeMap<String, Vec<ItemDefinition>>,
}

/// Loader for zone loot catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn load(path: &Path) -> LoadResult<BTreeMap<String, Vec<ItemDefinition>>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BTreeMap<String, Vec<ItemDefinition>>> {
        let data: ZoneCatalogData =
            ron::from_str(content).map_err(|e| anyhow::anyhow!("bad catalog RON: {e}"))?;
        for (zone, items) in &data.zones {
            for item in items {
                if item.name.is_empty() {
                    anyhow::bail!("zone {zone} contains an item with an empty name");
                }
            }
        }
        Ok(data.zones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"(
        zones: {
            "Test Meadow": [
                ( name: "Stick", can_deposit: true ),
                ( name: "Glow Cap", rarity: Rare, stat_effects: { Health: 10 } ),
            ],
        },
    )"#;

    #[test]
    fn parses_items_with_defaulted_fields() {
        let zones = CatalogLoader::parse(SAMPLE).unwrap();
        let items = &zones["Test Meadow"];
        assert_eq!(items.len(), 2);
        assert!(items[0].can_deposit);
        assert!(!items[0].is_usable());
        assert!(items[1].is_usable());
    }

    #[test]
    fn loads_from_a_file_on_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let zones = CatalogLoader::load(file.path()).unwrap();
        assert!(zones.contains_key("Test Meadow"));
    }

    #[test]
    fn rejects_unnamed_items() {
        let bad = r#"( zones: { "Z": [ ( name: "" ) ] } )"#;
        assert!(CatalogLoader::parse(bad).is_err());
    }
}
