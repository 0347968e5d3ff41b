//! Equipped items and the resistance totals derived from them.

use std::collections::BTreeMap;

use crate::env::CatalogOracle;

/// What the player has equipped, plus cached resistance totals.
///
/// The resistance map is derived state: it is recomputed from the catalog
/// on every equip and unequip so it can never drift from the equipped list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    equipped: Vec<String>,
    resist: BTreeMap<String, u32>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Equip an item by name. Equipping a name twice is a no-op.
    pub fn equip(&mut self, name: &str, catalog: &dyn CatalogOracle) {
        if self.is_equipped(name) {
            return;
        }
        self.equipped.push(name.to_string());
        self.recompute(catalog);
    }

    pub fn unequip(&mut self, name: &str, catalog: &dyn CatalogOracle) {
        if let Some(idx) = self.equipped.iter().position(|n| n == name) {
            self.equipped.remove(idx);
            self.recompute(catalog);
        }
    }

    pub fn is_equipped(&self, name: &str) -> bool {
        self.equipped.iter().any(|n| n == name)
    }

    pub fn equipped(&self) -> &[String] {
        &self.equipped
    }

    /// Total resistance against a damage type across all equipped items.
    pub fn resist(&self, damage_type: &str) -> u32 {
        self.resist.get(damage_type).copied().unwrap_or(0)
    }

    fn recompute(&mut self, catalog: &dyn CatalogOracle) {
        self.resist.clear();
        for name in &self.equipped {
            let Some(def) = catalog.definition(name) else {
                tracing::warn!(item = %name, "equipped item missing from catalog");
                continue;
            };
            for (damage_type, value) in &def.resist {
                *self.resist.entry(damage_type.clone()).or_insert(0) += value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::TestEnv;

    #[test]
    fn resist_totals_follow_equipped_items() {
        let fixture = TestEnv::new();
        let mut eq = Equipment::new();
        eq.equip("Ember Cloak", &fixture.catalog);
        assert_eq!(eq.resist("fire"), 10);

        eq.equip("Dragon Scale", &fixture.catalog);
        assert_eq!(eq.resist("fire"), 60);
        assert_eq!(eq.resist("frost"), 0);

        eq.unequip("Ember Cloak", &fixture.catalog);
        assert_eq!(eq.resist("fire"), 50);
    }

    #[test]
    fn double_equip_does_not_double_count() {
        let fixture = TestEnv::new();
        let mut eq = Equipment::new();
        eq.equip("Ember Cloak", &fixture.catalog);
        eq.equip("Ember Cloak", &fixture.catalog);
        assert_eq!(eq.equipped().len(), 1);
        assert_eq!(eq.resist("fire"), 10);
    }
}
