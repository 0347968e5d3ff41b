//! Item catalog oracle: typed item definitions keyed by zone.

use std::collections::{BTreeMap, BTreeSet};

use crate::state::StatKind;

/// Drop-table tier for an item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
}

/// Flat battle-stat bonuses an equipped item contributes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatEffects {
    pub attack: i32,
    pub evasion: i32,
    pub defense: i32,
}

impl CombatEffects {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A fully typed item definition.
///
/// Replaces ad-hoc per-item property bags: every effect an item can have is
/// a declared field, so the resolver and battle code never probe for
/// optional keys at runtime.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemDefinition {
    pub name: String,
    pub rarity: Rarity,
    /// Stat deltas applied when the item is consumed.
    pub stat_effects: BTreeMap<StatKind, i64>,
    /// Battle-stat bonuses while equipped.
    pub combat_effects: CombatEffects,
    /// Typed damage resistance while equipped, keyed by damage type name.
    pub resist: BTreeMap<String, u32>,
    /// Whether the liquidity bank accepts this item as deposit collateral.
    pub can_deposit: bool,
    pub description: String,
}

impl ItemDefinition {
    /// An item is usable if consuming it changes any stat.
    pub fn is_usable(&self) -> bool {
        !self.stat_effects.is_empty()
    }

    /// An item is equippable if it grants combat bonuses or resistances.
    pub fn is_equippable(&self) -> bool {
        !self.combat_effects.is_empty() || !self.resist.is_empty()
    }
}

/// Read-only access to the item catalog.
///
/// Implementations live in the content crate; the core only ever sees this
/// trait so tests can substitute fixed catalogs.
pub trait CatalogOracle: Send + Sync {
    /// Names of every zone with a loot table, in no particular order.
    fn zone_names(&self) -> Vec<&str>;

    /// Loot table for a zone. Unknown zones yield an empty slice.
    fn zone_items(&self, zone: &str) -> &[ItemDefinition];

    /// Look up an item definition by exact name, searching all zones.
    fn definition(&self, name: &str) -> Option<&ItemDefinition> {
        self.zone_names()
            .into_iter()
            .flat_map(|z| self.zone_items(z).iter())
            .find(|item| item.name == name)
    }

    /// Every distinct item name in the catalog, sorted.
    fn all_item_names(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        for zone in self.zone_names() {
            for item in self.zone_items(zone) {
                names.insert(item.name.clone());
            }
        }
        names.into_iter().collect()
    }
}
