//! The shared loot draw used by outcomes, battles and skirmish kills.

use crate::config::GameConfig;
use crate::env::{Env, Rarity, compute_seed};

/// Draw one random item from a zone's loot table.
///
/// A single percentile roll drives the whole draw: below 15 the search
/// comes up empty, at or above 95 a player of level 3+ draws from the
/// zone's rare pool, anything else draws uniformly from the full table.
/// The rare pool falls back to the full table when the zone has no rare
/// items, so a lucky roll is never worse than an ordinary one.
pub fn random_loot_for_zone(env: &Env, zone: &str, level: u32, seed: u64) -> Option<String> {
    let roll = env.rng.percent(seed);
    if roll < GameConfig::LOOT_NONE_PERCENT {
        return None;
    }

    let table = env.catalog.zone_items(zone);
    if table.is_empty() {
        tracing::warn!(zone, "loot draw against empty table");
        return None;
    }

    let pick_seed = compute_seed(seed, 0, 1);
    if roll >= GameConfig::LOOT_RARE_PERCENT && level >= GameConfig::LOOT_RARE_MIN_LEVEL {
        let rares: Vec<_> = table.iter().filter(|i| i.rarity == Rarity::Rare).collect();
        if !rares.is_empty() {
            let idx = env.rng.index(pick_seed, rares.len());
            return Some(rares[idx].name.clone());
        }
    }

    let idx = env.rng.index(pick_seed, table.len());
    Some(table[idx].name.clone())
}
