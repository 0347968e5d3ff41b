//! The content bundle: loaded data wired into game-core's oracle traits.

use std::collections::BTreeMap;
use std::path::Path;

use game_core::env::{
    CatalogOracle, Env, ItemDefinition, MarketCategory, NarrativeOracle, NarrativePrompt,
    PricedItem, Recipe, RngOracle, SecretRecipe, TablesOracle,
};
use serde::{Deserialize, Serialize};

use crate::loaders::tables::GameTables;
use crate::loaders::{CatalogLoader, LoadResult, NarrativeLoader, TablesLoader};

/// Narrative content for one zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneNarrative {
    pub prologues: Vec<String>,
    pub prompts: Vec<NarrativePrompt>,
}

/// Every piece of content a session needs, implementing all three content
/// oracles. Construct with [`ContentBundle::builtin`] for the shipped set
/// or [`ContentBundle::from_files`] for overrides.
pub struct ContentBundle {
    zones: BTreeMap<String, Vec<ItemDefinition>>,
    narrative: BTreeMap<String, ZoneNarrative>,
    tables: GameTables,
}

impl ContentBundle {
    /// The content set compiled into the binary.
    pub fn builtin() -> LoadResult<Self> {
        Ok(Self {
            zones: CatalogLoader::parse(include_str!("../data/loot_tables.ron"))?,
            narrative: NarrativeLoader::parse(include_str!("../data/narrative.ron"))?,
            tables: TablesLoader::parse(include_str!("../data/tables.ron"))?,
        })
    }

    /// Load all three content files from a directory.
    pub fn from_files(dir: &Path) -> LoadResult<Self> {
        Ok(Self {
            zones: CatalogLoader::load(&dir.join("loot_tables.ron"))?,
            narrative: NarrativeLoader::load(&dir.join("narrative.ron"))?,
            tables: TablesLoader::load(&dir.join("tables.ron"))?,
        })
    }

    /// Bundle all three oracles with the given RNG into an [`Env`].
    pub fn env<'a>(&'a self, rng: &'a dyn RngOracle) -> Env<'a> {
        Env::new(self, self, self, rng)
    }
}

impl CatalogOracle for ContentBundle {
    fn zone_names(&self) -> Vec<&str> {
        self.zones.keys().map(String::as_str).collect()
    }

    fn zone_items(&self, zone: &str) -> &[ItemDefinition] {
        self.zones.get(zone).map_or(&[], Vec::as_slice)
    }
}

impl NarrativeOracle for ContentBundle {
    fn prologues(&self, zone: &str) -> &[String] {
        self.narrative
            .get(zone)
            .map_or(&[], |z| z.prologues.as_slice())
    }

    fn prompts(&self, zone: &str) -> &[NarrativePrompt] {
        self.narrative
            .get(zone)
            .map_or(&[], |z| z.prompts.as_slice())
    }
}

impl TablesOracle for ContentBundle {
    fn recipes(&self) -> &[Recipe] {
        &self.tables.recipes
    }

    fn secret_recipes(&self) -> &[SecretRecipe] {
        &self.tables.secret_recipes
    }

    fn royal_market(&self) -> &[MarketCategory] {
        &self.tables.royal_market
    }

    fn merchant_stock(&self) -> &[PricedItem] {
        &self.tables.merchant_stock
    }

    fn enemy_names(&self) -> &[String] {
        &self.tables.enemy_names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::zone;

    #[test]
    fn builtin_content_parses() {
        let bundle = ContentBundle::builtin().unwrap();
        assert!(!bundle.recipes().is_empty());
        assert!(!bundle.enemy_names().is_empty());
        assert!(!bundle.zone_items("Outer Grasslands").is_empty());
    }

    #[test]
    fn every_world_zone_has_a_loot_table() {
        let bundle = ContentBundle::builtin().unwrap();
        for z in zone::ZONES {
            assert!(
                !bundle.zone_items(z.name).is_empty(),
                "no loot table for {}",
                z.name
            );
        }
    }

    #[test]
    fn wild_zones_carry_narrative_content() {
        let bundle = ContentBundle::builtin().unwrap();
        for z in zone::ZONES.iter().filter(|z| !zone::is_safe(z.name)) {
            assert!(
                !bundle.prompts(z.name).is_empty(),
                "no prompts for {}",
                z.name
            );
        }
    }

    #[test]
    fn starter_kit_items_are_defined() {
        let bundle = ContentBundle::builtin().unwrap();
        for name in ["Bread", "Water", "Iron Sword", "Wooden Armor", "Healing Medicine"] {
            assert!(bundle.definition(name).is_some(), "missing {name}");
        }
    }

    #[test]
    fn recipe_ingredients_exist_in_the_catalog() {
        let bundle = ContentBundle::builtin().unwrap();
        for recipe in bundle.recipes() {
            for ing in &recipe.ingredients {
                assert!(
                    bundle.definition(ing).is_some(),
                    "recipe {} wants undefined {ing}",
                    recipe.result
                );
            }
        }
    }

    #[test]
    fn camp_materials_are_obtainable() {
        let bundle = ContentBundle::builtin().unwrap();
        assert!(bundle.definition("Stick").is_some());
        assert!(bundle.definition("Cloth").is_some());
    }
}
