//! Turn-based battle: the staged fight entered from the Village arena.

use crate::config::GameConfig;
use crate::env::{CatalogOracle, Env, compute_seed, random_loot_for_zone};
use crate::error::SessionError;
use crate::leveling::check_level_up;
use crate::state::{Equipment, Inventory, PlayerStats, StatKind};

/// Player battle stats derived from level and equipped gear.
///
/// Derived fresh at battle start and after any mid-battle equipment use;
/// never stored long-term, so it cannot go stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleStats {
    pub attack: i32,
    pub evasion: i32,
    pub defense: i32,
    /// Display health: current health plus equipped bonuses, capped at the
    /// gauge ceiling.
    pub health: u32,
}

impl BattleStats {
    pub fn derive(stats: &PlayerStats, equipment: &Equipment, catalog: &dyn CatalogOracle) -> Self {
        let l = stats.level.saturating_sub(1) as i32;
        let mut derived = Self {
            attack: 8 + 2 * l,
            evasion: 5 + l / 2,
            defense: 3 + l * 7 / 10,
            health: stats.health,
        };
        let mut health_bonus: i64 = 0;
        for name in equipment.equipped() {
            let Some(def) = catalog.definition(name) else {
                continue;
            };
            derived.attack += def.combat_effects.attack;
            derived.evasion += def.combat_effects.evasion;
            derived.defense += def.combat_effects.defense;
            health_bonus += def.stat_effects.get(&StatKind::Health).copied().unwrap_or(0);
        }
        let display = stats.health as i64 + health_bonus.max(0);
        derived.health = display.clamp(0, GameConfig::STAT_CEILING as i64) as u32;
        derived
    }
}

/// A generated battle opponent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub name: String,
    pub level: u32,
    pub health: u32,
    pub max_health: u32,
    pub attack: i32,
    pub defense: i32,
}

impl Enemy {
    /// Generate an opponent scaled near the player's level: one below, at,
    /// or one above, never under level 1.
    pub fn generate(player_level: u32, env: &Env, seed: u64) -> Self {
        let offset = env.rng.range_i32(compute_seed(seed, 0, 0), 0, 2);
        let level = (player_level as i32 - 1 + offset).max(1) as u32;

        let names = env.tables.enemy_names();
        let name = if names.is_empty() {
            tracing::warn!("enemy name pool is empty");
            "Unknown Foe".to_string()
        } else {
            names[env.rng.index(compute_seed(seed, 0, 1), names.len())].clone()
        };

        let health = 50 + 10 * level;
        Self {
            name,
            level,
            health,
            max_health: health,
            attack: (5 + 2 * level) as i32,
            defense: (2 + 3 * level / 2) as i32,
        }
    }
}

/// What the player does this turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattleAction {
    Attack,
    Defend,
    UseItem(String),
    Flee,
}

/// How a turn ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattleOutcome {
    /// The battle continues.
    Continue,
    Victory {
        exp: u32,
        oromozi: u32,
        loot: Option<String>,
        levels_gained: u32,
    },
    /// Defeat never kills: the player wakes with reduced health and a
    /// lighter purse.
    Defeat { oromozi_lost: u32 },
    Fled,
}

impl BattleOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BattleOutcome::Continue)
    }
}

/// Everything that happened in one resolved turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub outcome: BattleOutcome,
    /// Whether the player dodged the enemy's reply this turn.
    pub dodged: bool,
    pub log: Vec<String>,
}

/// An in-progress battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    pub enemy: Enemy,
    pub defending: bool,
    pub turn: u32,
}

impl BattleState {
    pub fn new(enemy: Enemy) -> Self {
        Self {
            enemy,
            defending: false,
            turn: 0,
        }
    }

    /// Escape chance as a percent, clamped so extreme level gaps never
    /// push the roll outside 0..=100.
    pub fn flee_chance(&self, player_level: u32) -> u32 {
        let raw = 40 + 10 * (player_level as i32 - self.enemy.level as i32);
        raw.clamp(0, 100) as u32
    }

    /// Resolve one full turn: the player's action, then the enemy's reply
    /// unless the battle already ended.
    ///
    /// An invalid item choice returns an error without consuming the turn.
    pub fn resolve_turn(
        &mut self,
        action: BattleAction,
        stats: &mut PlayerStats,
        inventory: &mut Inventory,
        equipment: &Equipment,
        env: &Env,
        seed: u64,
    ) -> Result<TurnReport, SessionError> {
        let mut log = Vec::new();
        let derived = BattleStats::derive(stats, equipment, env.catalog);

        match action {
            BattleAction::Attack => {
                self.defending = false;
                let variance = env.rng.range_i32(compute_seed(seed, 0, 0), -2, 2);
                let damage = (derived.attack - self.enemy.defense + variance).max(1) as u32;
                self.enemy.health = self.enemy.health.saturating_sub(damage);
                log.push(format!("You hit {} for {damage}.", self.enemy.name));
            }
            BattleAction::Defend => {
                self.defending = true;
                log.push("You brace for the next blow.".to_string());
            }
            BattleAction::UseItem(ref name) => {
                if !inventory.has(name) {
                    return Err(SessionError::MissingItem(name.clone()));
                }
                let def = env
                    .catalog
                    .definition(name)
                    .ok_or_else(|| SessionError::UnknownItem(name.clone()))?;
                if !def.is_usable() {
                    return Err(SessionError::UnknownItem(name.clone()));
                }
                for (&stat, &delta) in &def.stat_effects {
                    stats.apply_delta(stat, delta);
                }
                inventory.remove(name, 1);
                log.push(format!("You use {name}."));
            }
            BattleAction::Flee => {
                let chance = self.flee_chance(stats.level);
                if env.rng.chance(compute_seed(seed, 0, 3), chance) {
                    log.push("You slip away from the fight.".to_string());
                    return Ok(TurnReport {
                        outcome: BattleOutcome::Fled,
                        dodged: false,
                        log,
                    });
                }
                log.push("You fail to escape!".to_string());
            }
        }
        self.turn += 1;

        if self.enemy.health == 0 {
            let outcome = self.victory(stats, inventory, env, seed, &mut log);
            return Ok(TurnReport {
                outcome,
                dodged: false,
                log,
            });
        }

        // Enemy turn.
        let mut dodged = false;
        let dodge_seed = compute_seed(seed, 0, 1);
        if env.rng.chance(dodge_seed, derived.evasion.max(0) as u32) {
            dodged = true;
            log.push(format!("You dodge {}'s attack.", self.enemy.name));
        } else {
            let variance = env.rng.range_i32(compute_seed(seed, 0, 2), -2, 1);
            let mut reduction = derived.defense;
            if self.defending {
                reduction += GameConfig::DEFEND_BONUS;
                self.defending = false;
            }
            let damage = (self.enemy.attack - reduction + variance).max(1) as u32;
            stats.health = stats.health.saturating_sub(damage);
            log.push(format!("{} hits you for {damage}.", self.enemy.name));
        }

        if stats.health == 0 {
            let lost = stats.oromozi.min(GameConfig::DEFEAT_OROMOZI_LOSS);
            stats.oromozi -= lost;
            stats.health = GameConfig::DEFEAT_HEALTH;
            log.push(format!(
                "You collapse. {lost} oromozi slips from your pockets."
            ));
            return Ok(TurnReport {
                outcome: BattleOutcome::Defeat { oromozi_lost: lost },
                dodged: false,
                log,
            });
        }

        Ok(TurnReport {
            outcome: BattleOutcome::Continue,
            dodged,
            log,
        })
    }

    fn victory(
        &self,
        stats: &mut PlayerStats,
        inventory: &mut Inventory,
        env: &Env,
        seed: u64,
        log: &mut Vec<String>,
    ) -> BattleOutcome {
        let exp = 10 + 5 * self.enemy.level;
        let oromozi = 20 + 10 * self.enemy.level;
        stats.apply_delta(StatKind::Experience, exp as i64);
        stats.apply_delta(StatKind::Oromozi, oromozi as i64);
        log.push(format!(
            "{} falls! +{exp} experience, +{oromozi} oromozi.",
            self.enemy.name
        ));

        let mut loot = None;
        if env
            .rng
            .chance(compute_seed(seed, 0, 4), GameConfig::COMBAT_LOOT_PERCENT)
        {
            loot = random_loot_for_zone(
                env,
                &stats.current_zone,
                stats.level,
                compute_seed(seed, 0, 5),
            );
            if let Some(item) = &loot {
                inventory.add(item, 1);
                log.push(format!("The fallen foe drops: {item}"));
            }
        }

        let levels_gained = check_level_up(stats);
        if levels_gained > 0 {
            log.push(format!("Level up! Now level {}.", stats.level));
        }

        BattleOutcome::Victory {
            exp,
            oromozi,
            loot,
            levels_gained,
        }
    }
}
