//! Camp setup: a timed commitment of materials for a gauge refill.

use crate::clock::GameClock;
use crate::config::GameConfig;
use crate::state::Inventory;

/// An in-progress camp. Materials are already consumed; cancelling before
/// completion refunds them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CampSetup {
    remaining_secs: f64,
}

impl CampSetup {
    pub fn new() -> Self {
        Self {
            remaining_secs: GameConfig::CAMP_SETUP_SECONDS as f64,
        }
    }

    /// Advance the setup; returns true once the camp completes.
    pub fn tick(&mut self, dt_secs: f64) -> bool {
        self.remaining_secs -= dt_secs.max(0.0);
        self.remaining_secs <= 0.0
    }

    pub fn remaining_secs(&self) -> f64 {
        self.remaining_secs.max(0.0)
    }
}

impl Default for CampSetup {
    fn default() -> Self {
        Self::new()
    }
}

/// Camping is only offered while night approaches or has fallen.
pub fn camp_window_open(clock: &GameClock) -> bool {
    clock.is_near_night() || clock.is_night()
}

/// Whether the inventory holds the materials a camp consumes.
pub fn has_camp_materials(inventory: &Inventory) -> bool {
    inventory.has_all([
        ("Stick", GameConfig::CAMP_STICKS),
        ("Cloth", GameConfig::CAMP_CLOTH),
    ])
}

/// Consume camp materials.
pub fn take_camp_materials(inventory: &mut Inventory) {
    inventory.remove("Stick", GameConfig::CAMP_STICKS);
    inventory.remove("Cloth", GameConfig::CAMP_CLOTH);
}

/// Refund camp materials after a cancelled setup.
pub fn refund_camp_materials(inventory: &mut Inventory) {
    inventory.add("Stick", GameConfig::CAMP_STICKS);
    inventory.add("Cloth", GameConfig::CAMP_CLOTH);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_completes_after_ninety_seconds() {
        let mut setup = CampSetup::new();
        assert!(!setup.tick(45.0));
        assert!((setup.remaining_secs() - 45.0).abs() < f64::EPSILON);
        assert!(setup.tick(45.0));
        assert_eq!(setup.remaining_secs(), 0.0);
    }

    #[test]
    fn window_spans_near_night_and_night() {
        let mut clock = GameClock::new(&GameConfig::default());
        clock.set_hour(12);
        assert!(!camp_window_open(&clock));
        clock.set_hour(18);
        assert!(camp_window_open(&clock));
        clock.set_hour(23);
        assert!(camp_window_open(&clock));
        clock.set_hour(3);
        assert!(camp_window_open(&clock));
        clock.set_hour(6);
        assert!(!camp_window_open(&clock));
    }

    #[test]
    fn materials_check_and_refund() {
        let mut inv = Inventory::new();
        inv.add("Stick", 2);
        assert!(!has_camp_materials(&inv));
        inv.add("Cloth", 1);
        assert!(has_camp_materials(&inv));
        take_camp_materials(&mut inv);
        assert!(inv.is_empty());
        refund_camp_materials(&mut inv);
        assert!(has_camp_materials(&inv));
    }
}
