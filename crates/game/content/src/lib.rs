//! Data-driven game content and its loaders.
//!
//! This crate houses the shipped content set (zone loot tables, narrative
//! prompts, balance tables) as RON files, plus loaders for overriding any
//! of them from disk. [`ContentBundle`] wires the loaded data into the
//! oracle traits game-core consumes.
//!
//! Content never appears in game state; sessions only ever read it.

pub mod bundle;
pub mod loaders;

pub use bundle::{ContentBundle, ZoneNarrative};
pub use loaders::{CatalogLoader, NarrativeLoader, TablesLoader};
