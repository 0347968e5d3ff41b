//! Environment oracles: read-only content the simulation consults.
//!
//! The core never loads files or touches an OS random source. Content and
//! randomness arrive through these traits, implemented by the content crate
//! in production and by small fixtures in tests.

mod catalog;
mod loot;
mod narrative;
mod rng;
mod tables;

pub use catalog::{CatalogOracle, CombatEffects, ItemDefinition, Rarity};
pub use loot::random_loot_for_zone;
pub use narrative::{NarrativeOracle, NarrativePrompt};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use tables::{MarketCategory, PricedItem, Recipe, SecretRecipe, TablesOracle};

/// Bundle of every oracle a session needs, borrowed for the duration of a
/// call. Copyable so helpers can pass it around freely.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    pub catalog: &'a dyn CatalogOracle,
    pub narrative: &'a dyn NarrativeOracle,
    pub tables: &'a dyn TablesOracle,
    pub rng: &'a dyn RngOracle,
}

impl<'a> Env<'a> {
    pub fn new(
        catalog: &'a dyn CatalogOracle,
        narrative: &'a dyn NarrativeOracle,
        tables: &'a dyn TablesOracle,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self {
            catalog,
            narrative,
            tables,
            rng,
        }
    }
}
