//! The action vocabulary a presentation layer can dispatch.

use crate::combat::Direction;

/// A village station or world object the player can activate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StationKind {
    LiquidityBank,
    MerchantQuarter,
    RoyalMarket,
    TinkerersLab,
    CraftingWorkshop,
    TradingPost,
    /// The Village arena; entering starts a staged battle.
    BattleArena,
    /// The gate out of the Village into the wilds.
    ScavengerGate,
}

/// What an Interact action is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InteractTarget {
    /// A narrative event marker in the wilds.
    EventMarker,
    Station(StationKind),
}

/// Every input the session understands. Hosts map keys, taps or network
/// messages onto these; the session neither knows nor cares which.
#[derive(Clone, Debug, PartialEq)]
pub enum PlayerAction {
    Move(Direction),
    /// Swing at whatever is in front of the player.
    Attack,
    Interact(InteractTarget),
    /// Advance the current dialog or flow.
    Confirm,
    /// Back out of the current dialog, menu or setup.
    Cancel,
    /// Choose an option in the current menu, by index.
    SelectOption(usize),
    UseItem(String),
    EquipItem(String),
}
