//! The static world map: an ordered list of traversable zones.
//!
//! Zone order matters; "return to previous zone" walks one step backwards
//! through this list. The Village is the only safe zone: no survival decay,
//! no monster spawns, and death cannot occur there.

/// A traversable region of the world, with the asset keys a presentation
/// layer needs to render it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    pub name: &'static str,
    pub map_key: &'static str,
    pub background_key: &'static str,
    pub foreground_key: &'static str,
}

/// Canonical name of the safe zone.
pub const VILLAGE: &str = "Village";

/// All zones, in world order.
pub const ZONES: [Zone; 4] = [
    Zone {
        name: "Outer Grasslands",
        map_key: "OuterGrasslandsMap",
        background_key: "outerGrasslands",
        foreground_key: "outerGrasslandsForeground",
    },
    Zone {
        name: "Shady Grove",
        map_key: "ShadyGroveMap",
        background_key: "shadyGrove",
        foreground_key: "shadyGroveForeground",
    },
    Zone {
        name: "Arid Desert",
        map_key: "AridDesertMap",
        background_key: "aridDesert",
        foreground_key: "aridDesertForeground",
    },
    Zone {
        name: "Village",
        map_key: "VillageMap",
        background_key: "villageCommons",
        foreground_key: "villageForeground",
    },
];

/// Look up a zone by name, case-insensitively.
pub fn find(name: &str) -> Option<&'static Zone> {
    ZONES.iter().find(|z| z.name.eq_ignore_ascii_case(name))
}

/// The zone one step before `name` in world order, if any.
pub fn previous(name: &str) -> Option<&'static Zone> {
    let idx = ZONES
        .iter()
        .position(|z| z.name.eq_ignore_ascii_case(name))?;
    idx.checked_sub(1).map(|i| &ZONES[i])
}

/// Whether survival decay and combat hazards are suspended in this zone.
pub fn is_safe(name: &str) -> bool {
    name.eq_ignore_ascii_case(VILLAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(find("arid desert").map(|z| z.name), Some("Arid Desert"));
        assert_eq!(find("ARID DESERT").map(|z| z.name), Some("Arid Desert"));
        assert!(find("Atlantis").is_none());
    }

    #[test]
    fn previous_walks_world_order() {
        assert_eq!(previous("Shady Grove").map(|z| z.name), Some("Outer Grasslands"));
        assert_eq!(previous("Outer Grasslands"), None);
    }

    #[test]
    fn only_the_village_is_safe() {
        assert!(is_safe("Village"));
        assert!(is_safe("village"));
        assert!(!is_safe("Outer Grasslands"));
    }
}
