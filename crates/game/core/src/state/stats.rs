//! Player stats: survival gauges, currency and progression counters.

use crate::config::GameConfig;

/// A named stat that outcome directives can target.
///
/// Parsing is case-insensitive and accepts `exp` as shorthand for
/// experience, matching the directive grammar used in narrative text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatKind {
    Health,
    Stamina,
    Thirst,
    Hunger,
    #[strum(serialize = "experience", serialize = "exp")]
    Experience,
    Oromozi,
}

/// Result of one survival tick, for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurvivalTick {
    /// Health lost this tick because a gauge was depleted (0 if none was).
    pub health_penalty: u32,
}

/// The player's persistent numbers.
///
/// Gauges (health, stamina, thirst, hunger) are clamped to
/// `0..=GameConfig::STAT_CEILING` by every mutation; oromozi and experience
/// are unbounded above and floored at zero.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerStats {
    pub health: u32,
    pub stamina: u32,
    pub thirst: u32,
    pub hunger: u32,
    pub oromozi: u32,
    pub experience: u32,
    pub level: u32,
    pub current_zone: String,
}

impl PlayerStats {
    /// A fresh character: full gauges, level 1, no experience.
    pub fn new(zone: &str, oromozi: u32) -> Self {
        Self {
            health: GameConfig::STAT_CEILING,
            stamina: GameConfig::STAT_CEILING,
            thirst: GameConfig::STAT_CEILING,
            hunger: GameConfig::STAT_CEILING,
            oromozi,
            experience: 0,
            level: 1,
            current_zone: zone.to_string(),
        }
    }

    /// Apply a signed delta to one stat, honoring that stat's bounds.
    ///
    /// Typed health damage does not come through here; it goes through the
    /// resolver so resistances apply first.
    pub fn apply_delta(&mut self, stat: StatKind, delta: i64) {
        match stat {
            StatKind::Health => self.health = clamp_gauge(self.health, delta),
            StatKind::Stamina => self.stamina = clamp_gauge(self.stamina, delta),
            StatKind::Thirst => self.thirst = clamp_gauge(self.thirst, delta),
            StatKind::Hunger => self.hunger = clamp_gauge(self.hunger, delta),
            StatKind::Experience => self.experience = add_floor_zero(self.experience, delta),
            StatKind::Oromozi => self.oromozi = add_floor_zero(self.oromozi, delta),
        }
    }

    /// One survival tick: decay stamina, thirst and hunger, then apply at
    /// most one health penalty tier based on the worst gauge.
    ///
    /// The tiers are exclusive. A gauge at or below the critical threshold
    /// costs `CRITICAL_PENALTY` health and the low tier is skipped entirely,
    /// so the worst single tick costs 8 health, never 11.
    pub fn tick_survival(&mut self) -> SurvivalTick {
        self.stamina = self.stamina.saturating_sub(GameConfig::SURVIVAL_DECAY);
        self.thirst = self.thirst.saturating_sub(GameConfig::SURVIVAL_DECAY);
        self.hunger = self.hunger.saturating_sub(GameConfig::SURVIVAL_DECAY);

        let worst = self.stamina.min(self.thirst).min(self.hunger);
        let penalty = if worst <= GameConfig::CRITICAL_THRESHOLD {
            GameConfig::CRITICAL_PENALTY
        } else if worst <= GameConfig::LOW_THRESHOLD {
            GameConfig::LOW_PENALTY
        } else {
            0
        };
        self.health = self.health.saturating_sub(penalty);

        SurvivalTick {
            health_penalty: penalty,
        }
    }

    /// Refill every gauge to the ceiling. Level, experience and oromozi are
    /// untouched; used on respawn, camping never calls this.
    pub fn refill_gauges(&mut self) {
        self.health = GameConfig::STAT_CEILING;
        self.stamina = GameConfig::STAT_CEILING;
        self.thirst = GameConfig::STAT_CEILING;
        self.hunger = GameConfig::STAT_CEILING;
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}

fn clamp_gauge(current: u32, delta: i64) -> u32 {
    let next = current as i64 + delta;
    next.clamp(0, GameConfig::STAT_CEILING as i64) as u32
}

fn add_floor_zero(current: u32, delta: i64) -> u32 {
    let next = (current as i64 + delta).max(0);
    next.min(u32::MAX as i64) as u32
}
