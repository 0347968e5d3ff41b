//! Interaction mode state machine.
//!
//! A session is always in exactly one mode. Every mode except `None` halts
//! player movement; the economy and battle modes additionally suspend
//! real-time monster simulation so a menu can never get the player killed.

/// The session's current interaction context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Free exploration; the only mode in which movement is allowed.
    None,
    /// Scene-setting text shown when an event marker is activated.
    Prologue,
    /// A narrative prompt is on screen awaiting confirmation.
    Prompt,
    /// The player is choosing between narrative options.
    Choices,
    /// The resolved outcome text is on screen.
    Outcome,
    /// Post-outcome menu (use item / equip item / continue).
    ItemMenu,
    /// Picking a specific item to use or equip.
    ItemPick,
    /// Liquidity bank screen.
    Liquidity,
    /// Merchant quarter screen.
    Merchant,
    /// Royal market screen.
    Royal,
    /// Tinkerer's lab screen.
    Tinker,
    /// Crafting workshop screen.
    Craft,
    /// Trading post screen.
    Trading,
    /// Turn-based battle in progress.
    Battle,
    /// "Set up camp?" confirmation dialog.
    CampingPrompt,
}

impl Mode {
    /// Every mode other than `None` freezes the player in place.
    pub fn blocks_movement(&self) -> bool {
        !matches!(self, Mode::None)
    }

    /// Modes during which monsters neither move nor attack.
    pub fn suspends_skirmish(&self) -> bool {
        matches!(
            self,
            Mode::Liquidity
                | Mode::Merchant
                | Mode::Royal
                | Mode::Tinker
                | Mode::Craft
                | Mode::Trading
                | Mode::Battle
        )
    }

    /// Economy screens share cancel semantics: Cancel exits to `None`.
    pub fn is_economy(&self) -> bool {
        matches!(
            self,
            Mode::Liquidity
                | Mode::Merchant
                | Mode::Royal
                | Mode::Tinker
                | Mode::Craft
                | Mode::Trading
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_free_roam_allows_movement() {
        assert!(!Mode::None.blocks_movement());
        assert!(Mode::Prompt.blocks_movement());
        assert!(Mode::Battle.blocks_movement());
        assert!(Mode::CampingPrompt.blocks_movement());
    }

    #[test]
    fn menus_suspend_the_skirmish_loop() {
        assert!(Mode::Liquidity.suspends_skirmish());
        assert!(Mode::Battle.suspends_skirmish());
        // Narrative dialogs freeze the player but the world keeps moving.
        assert!(!Mode::Prompt.suspends_skirmish());
        assert!(!Mode::None.suspends_skirmish());
    }
}
