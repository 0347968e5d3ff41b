//! Balance tables loader.

use std::path::Path;

use game_core::env::{MarketCategory, PricedItem, Recipe, SecretRecipe};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Every balance table, as stored on disk and held by the bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameTables {
    pub recipes: Vec<Recipe>,
    pub secret_recipes: Vec<SecretRecipe>,
    pub royal_market: Vec<MarketCategory>,
    pub merchant_stock: Vec<PricedItem>,
    pub enemy_names: Vec<String>,
}

/// Loader for balance tables from RON files.
pub struct TablesLoader;

impl TablesLoader {
    pub fn load(path: &Path) -> LoadResult<GameTables> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameTables> {
        let tables: GameTables =
            ron::from_str(content).map_err(|e| anyhow::anyhow!("bad tables RON: {e}"))?;
        if tables.enemy_names.is_empty() {
            anyhow::bail!("enemy name pool cannot be empty");
        }
        Ok(tables)
    }
}
