//! Level progression.

use crate::config::GameConfig;
use crate::state::PlayerStats;

/// Consume banked experience into levels.
///
/// Advancing from level `n` costs `n * 100` experience; the loop keeps
/// going while the remainder still covers the next threshold, so one large
/// award can grant several levels at once. Each level-up refills health to
/// the ceiling. Returns the number of levels gained.
pub fn check_level_up(stats: &mut PlayerStats) -> u32 {
    let mut gained = 0;
    loop {
        let needed = stats.level * GameConfig::EXP_PER_LEVEL;
        if stats.experience < needed {
            break;
        }
        stats.experience -= needed;
        stats.level += 1;
        stats.health = GameConfig::STAT_CEILING;
        gained += 1;
        tracing::info!(level = stats.level, "level up");
    }
    gained
}
