//! Outcome resolution: apply parsed directives to player state.

use std::str::FromStr;

use crate::config::GameConfig;
use crate::env::{Env, compute_seed, random_loot_for_zone};
use crate::leveling::check_level_up;
use crate::outcome::{OutcomeToken, parse_outcome};
use crate::state::{Equipment, Inventory, PlayerStats, StatKind, SurvivalTick};
use crate::zone;

/// Everything that happened while resolving one outcome.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OutcomeResolution {
    /// Human-readable lines describing each applied effect, in order.
    pub log: Vec<String>,
    /// Item granted by a loot directive, if the draw succeeded.
    pub loot: Option<String>,
    /// Exploration experience granted (zero inside the Village).
    pub exploration_exp: u32,
    /// Levels gained across all experience sources in this resolution.
    pub levels_gained: u32,
    /// Survival decay applied, when outside the Village.
    pub survival: Option<SurvivalTick>,
    /// Canonical destination zone, when a travel directive fired.
    pub travel_to: Option<String>,
    /// Whether the player's health reached zero during resolution.
    pub died: bool,
}

/// Damage dealt after typed resistance.
///
/// Resistance absorbs at most 70% of the raw hit, so armor stacking can
/// soften a blow but never nullify it.
pub fn typed_damage(raw: u32, resist: u32) -> u32 {
    // Widened so the cap survives directive deltas near u32::MAX.
    let cap = (raw as u64 * GameConfig::RESIST_CAP_NUM as u64 / GameConfig::RESIST_CAP_DEN as u64)
        as u32;
    raw - resist.min(cap)
}

/// Resolve one outcome string against the player.
///
/// Application order is fixed: stat directives in text order, then one
/// survival tick and the exploration reward (both skipped inside the
/// Village), then the loot draw, then travel. Unknown stat names are
/// skipped with a warning rather than failing the whole outcome.
pub fn resolve_outcome(
    text: &str,
    stats: &mut PlayerStats,
    inventory: &mut Inventory,
    equipment: &Equipment,
    env: &Env,
    seed: u64,
) -> OutcomeResolution {
    let mut res = OutcomeResolution::default();
    let in_wilds = !zone::is_safe(&stats.current_zone);

    let tokens = parse_outcome(text);
    let mut wants_loot = false;

    for token in &tokens {
        match token {
            OutcomeToken::Stat {
                stat,
                delta,
                damage_type,
            } => apply_stat(stats, equipment, stat, *delta, damage_type.as_deref(), &mut res),
            OutcomeToken::Loot => wants_loot = true,
            OutcomeToken::Travel { destination } => match zone::find(destination) {
                Some(z) => res.travel_to = Some(z.name.to_string()),
                None => {
                    tracing::warn!(destination, "travel directive names unknown zone");
                    res.log.push(format!("The road to {destination} does not exist."));
                }
            },
        }
    }

    if in_wilds {
        let tick = stats.tick_survival();
        if tick.health_penalty > 0 {
            res.log
                .push(format!("Exposure saps {} health.", tick.health_penalty));
        }
        res.survival = Some(tick);

        let spread = GameConfig::EXPLORE_EXP_SPREAD as i32;
        let bonus = env.rng.range_i32(compute_seed(seed, 0, 10), 0, spread) as u32;
        let exp = GameConfig::EXPLORE_EXP_BASE + bonus;
        stats.apply_delta(StatKind::Experience, exp as i64);
        res.exploration_exp = exp;
        res.log.push(format!("+{exp} exploration experience"));
    }

    let gained = check_level_up(stats);
    if gained > 0 {
        res.levels_gained += gained;
        res.log.push(format!("Level up! Now level {}.", stats.level));
    }

    if wants_loot {
        let loot_seed = compute_seed(seed, 0, 11);
        match random_loot_for_zone(env, &stats.current_zone, stats.level, loot_seed) {
            Some(item) => {
                inventory.add(&item, 1);
                res.log.push(format!("Found: {item}"));
                res.loot = Some(item);
            }
            None => res
                .log
                .push("Searched but found nothing of value.".to_string()),
        }
    }

    res.died = stats.is_dead();
    res
}

fn apply_stat(
    stats: &mut PlayerStats,
    equipment: &Equipment,
    stat: &str,
    delta: i64,
    damage_type: Option<&str>,
    res: &mut OutcomeResolution,
) {
    let Ok(kind) = StatKind::from_str(stat) else {
        tracing::warn!(stat, "outcome names unknown stat");
        return;
    };

    if kind == StatKind::Health
        && delta < 0
        && let Some(damage_type) = damage_type
    {
        let raw = (-delta).min(u32::MAX as i64) as u32;
        let dealt = typed_damage(raw, equipment.resist(damage_type));
        stats.apply_delta(StatKind::Health, -(dealt as i64));
        let resisted = raw - dealt;
        if resisted > 0 {
            res.log
                .push(format!("Took {dealt} {damage_type} damage ({resisted} resisted)."));
        } else {
            res.log.push(format!("Took {dealt} {damage_type} damage."));
        }
        return;
    }

    stats.apply_delta(kind, delta);
    res.log.push(format!("{delta:+} {kind}"));
}
