//! Stacked inventory with stable display order.

/// One stack of a named item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub name: String,
    pub quantity: u32,
}

/// The player's carried items.
///
/// Backed by a vector so stacks keep first-insertion order; menus that list
/// the inventory render identically run after run. Adding to an existing
/// name grows its stack, and a stack that reaches zero is removed outright.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    stacks: Vec<ItemStack>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting kit handed to a fresh character.
    pub fn starter_kit() -> Self {
        let mut inv = Self::new();
        for name in [
            "Bread",
            "Water",
            "Iron Sword",
            "Wooden Armor",
            "Healing Medicine",
        ] {
            inv.add(name, 1);
        }
        inv
    }

    pub fn add(&mut self, name: &str, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.stacks.iter_mut().find(|s| s.name == name) {
            Some(stack) => stack.quantity += quantity,
            None => self.stacks.push(ItemStack {
                name: name.to_string(),
                quantity,
            }),
        }
    }

    /// Remove up to `quantity` of an item. Removing an item that is not
    /// held is a no-op, never an error; economy callers validate with
    /// [`Inventory::count`] first when failure must be surfaced.
    pub fn remove(&mut self, name: &str, quantity: u32) {
        if let Some(idx) = self.stacks.iter().position(|s| s.name == name) {
            let stack = &mut self.stacks[idx];
            stack.quantity = stack.quantity.saturating_sub(quantity);
            if stack.quantity == 0 {
                self.stacks.remove(idx);
            }
        }
    }

    pub fn count(&self, name: &str) -> u32 {
        self.stacks
            .iter()
            .find(|s| s.name == name)
            .map_or(0, |s| s.quantity)
    }

    pub fn has(&self, name: &str) -> bool {
        self.count(name) > 0
    }

    /// Whether every `(name, quantity)` requirement is met simultaneously.
    pub fn has_all<'a>(&self, wanted: impl IntoIterator<Item = (&'a str, u32)>) -> bool {
        wanted.into_iter().all(|(name, qty)| self.count(name) >= qty)
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Stacks in display order.
    pub fn stacks(&self) -> &[ItemStack] {
        &self.stacks
    }

    /// Drop everything. Used on death.
    pub fn clear(&mut self) {
        self.stacks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_remove_round_trips() {
        let mut inv = Inventory::new();
        inv.add("Stick", 3);
        inv.add("Stick", 2);
        assert_eq!(inv.count("Stick"), 5);
        inv.remove("Stick", 5);
        assert_eq!(inv.count("Stick"), 0);
        assert!(inv.is_empty());
    }

    #[test]
    fn removing_absent_item_is_a_no_op() {
        let mut inv = Inventory::new();
        inv.add("Cloth", 1);
        inv.remove("Stick", 4);
        assert_eq!(inv.count("Cloth"), 1);
        assert_eq!(inv.stacks().len(), 1);
    }

    #[test]
    fn stacks_keep_insertion_order() {
        let mut inv = Inventory::new();
        inv.add("Wood", 1);
        inv.add("Iron Ore", 1);
        inv.add("Wood", 2);
        inv.add("Cloth", 1);
        let names: Vec<_> = inv.stacks().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Wood", "Iron Ore", "Cloth"]);
    }

    #[test]
    fn has_all_checks_quantities_together() {
        let mut inv = Inventory::new();
        inv.add("Stick", 2);
        inv.add("Cloth", 1);
        assert!(inv.has_all([("Stick", 2), ("Cloth", 1)]));
        assert!(!inv.has_all([("Stick", 3), ("Cloth", 1)]));
    }

    #[test]
    fn starter_kit_contents() {
        let inv = Inventory::starter_kit();
        assert_eq!(inv.count("Bread"), 1);
        assert_eq!(inv.count("Iron Sword"), 1);
        assert_eq!(inv.stacks().len(), 5);
    }
}
