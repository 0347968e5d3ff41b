//! Balance constants for the survival simulation.
//!
//! Everything that tunes the economy or the survival loop lives here so the
//! numbers are auditable in one place. All formulas downstream use integer
//! arithmetic only; two sessions fed the same seed and the same action
//! sequence must produce identical state.

/// Tunable parameters for a running session.
///
/// Most balance values are compile-time constants; the handful that vary by
/// deployment (day length, starting currency) are instance fields so a host
/// can override them without recompiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Length of one in-game day in real seconds.
    pub seconds_per_day: u32,
    /// Oromozi balance granted to a fresh character.
    pub starting_oromozi: u32,
}

impl GameConfig {
    /// Upper bound for every survival gauge (health, stamina, thirst, hunger).
    pub const STAT_CEILING: u32 = 100;

    /// Per-tick decay applied to stamina, thirst and hunger outside the Village.
    pub const SURVIVAL_DECAY: u32 = 5;

    /// Gauge level at or below which the harsher health penalty applies.
    pub const CRITICAL_THRESHOLD: u32 = 10;
    /// Health lost per tick when any gauge is at or below the critical threshold.
    pub const CRITICAL_PENALTY: u32 = 8;
    /// Gauge level at or below which the milder health penalty applies.
    pub const LOW_THRESHOLD: u32 = 25;
    /// Health lost per tick when any gauge is at or below the low threshold.
    pub const LOW_PENALTY: u32 = 3;

    /// Experience required to advance from level `n` is `n * EXP_PER_LEVEL`.
    pub const EXP_PER_LEVEL: u32 = 100;

    /// Minimum exploration experience granted per resolved outcome.
    pub const EXPLORE_EXP_BASE: u32 = 5;
    /// Random bonus on top of the base, inclusive upper bound.
    pub const EXPLORE_EXP_SPREAD: u32 = 4;

    /// Typed damage reduction cap, expressed as numerator/denominator of the
    /// raw damage (resistance can absorb at most 70% of a hit).
    pub const RESIST_CAP_NUM: u32 = 7;
    pub const RESIST_CAP_DEN: u32 = 10;

    /// Percent chance (out of 100) that a loot draw yields nothing.
    pub const LOOT_NONE_PERCENT: u32 = 15;
    /// Roll at or above this (out of 100) draws from the rare pool.
    pub const LOOT_RARE_PERCENT: u32 = 95;
    /// Minimum level required to receive rare loot.
    pub const LOOT_RARE_MIN_LEVEL: u32 = 3;

    /// Extra defense while the player holds the defend stance in battle.
    pub const DEFEND_BONUS: i32 = 5;
    /// Most oromozi a battle defeat can cost.
    pub const DEFEAT_OROMOZI_LOSS: u32 = 50;
    /// Health restored to after losing a battle (defeat never kills).
    pub const DEFEAT_HEALTH: u32 = 20;
    /// Percent chance a battle victory or monster kill drops loot.
    pub const COMBAT_LOOT_PERCENT: u32 = 40;

    /// Integer yield rate for liquidity deposits, applied per full day staked.
    pub const LIQUIDITY_RATE: u64 = 50;

    /// Seconds a camp takes to set up once materials are committed.
    pub const CAMP_SETUP_SECONDS: u32 = 90;
    /// Materials consumed when committing to a camp.
    pub const CAMP_STICKS: u32 = 2;
    pub const CAMP_CLOTH: u32 = 1;
    /// Gauge restoration applied when a camp completes.
    pub const CAMP_RESTORE_HEALTH: u32 = 30;
    pub const CAMP_RESTORE_STAMINA: u32 = 50;
    pub const CAMP_RESTORE_HUNGER: u32 = 20;
    pub const CAMP_RESTORE_THIRST: u32 = 30;

    /// Narrative exchanges before the "return to previous zone" travel option
    /// is offered.
    pub const RETURN_OPTION_PROMPTS: u32 = 8;

    pub const DEFAULT_SECONDS_PER_DAY: u32 = 240;
    pub const DEFAULT_STARTING_OROMOZI: u32 = 1000;

    /// Seconds of elapsed session time per in-game hour.
    pub const fn seconds_per_hour(&self) -> u32 {
        self.seconds_per_day / 24
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seconds_per_day: Self::DEFAULT_SECONDS_PER_DAY,
            starting_oromozi: Self::DEFAULT_STARTING_OROMOZI,
        }
    }
}
