//! Events a session emits for its presentation layer.

use crate::state::{Inventory, PlayerStats};

/// Visual or audio cue the renderer should play. The simulation never
/// renders; it only names the cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    Slash,
    Dodge,
    Heal,
    LevelUp,
    CrateBreak,
    CampFire,
}

/// State that survives a zone transition.
///
/// Everything else (monsters, crates, open menus) belongs to the departing
/// zone and is rebuilt on arrival.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarryState {
    pub stats: PlayerStats,
    pub inventory: Inventory,
    pub prompt_count: u32,
}

/// One observable consequence of a dispatched action or an advance tick.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// Player stats changed; the HUD should refresh.
    StatsChanged,
    /// Inventory contents changed.
    InventoryChanged,
    /// Show a dialog with optional selectable options.
    DialogRequested {
        text: String,
        options: Vec<String>,
    },
    /// Play a named effect.
    EffectRequested(EffectKind),
    /// The session wants to move to another zone.
    ZoneTransitionRequested {
        zone: String,
        carry: CarryState,
    },
    /// The player died; a transition back to the Village follows.
    PlayerDeath,
    /// Battle state changed (started, progressed or ended).
    BattleStateChanged,
    /// A line for the scrolling event log.
    LogAppended(String),
}
