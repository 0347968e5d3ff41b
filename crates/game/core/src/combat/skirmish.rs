//! Real-time skirmish combat: night monsters and breakable loot crates.
//!
//! Positions are in world pixels and time in milliseconds, matching what a
//! rendering host feeds the session. The simulation itself stays
//! deterministic: every random draw goes through the RNG oracle.

use crate::config::GameConfig;
use crate::env::{Env, compute_seed, random_loot_for_zone};

/// Melee cone reach in front of the player.
pub const PLAYER_REACH: f32 = 120.0;
/// Lateral tolerance of the melee cone.
pub const PLAYER_CONE_WIDTH: f32 = 50.0;
/// Reach when striking a loot crate.
pub const CRATE_REACH: f32 = 60.0;

/// A point in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Facing direction, used to orient the melee cone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

/// Whether `target` is inside the player's melee cone.
///
/// The cone is a rectangle extending `PLAYER_REACH` in the facing
/// direction, `PLAYER_CONE_WIDTH` to either side.
pub fn cone_contains(player: Position, facing: Direction, target: Position) -> bool {
    let dx = target.x - player.x;
    let dy = target.y - player.y;
    let (forward, lateral) = match facing {
        Direction::Up => (-dy, dx),
        Direction::Down => (dy, dx),
        Direction::Left => (-dx, dy),
        Direction::Right => (dx, dy),
    };
    (0.0..=PLAYER_REACH).contains(&forward) && lateral.abs() <= PLAYER_CONE_WIDTH
}

/// Current monster behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MonsterState {
    #[default]
    Idle,
    Walking,
    Attacking,
}

/// A night-spawned monster.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub position: Position,
    pub state: MonsterState,
    pub level: u32,
    pub health: u32,
    pub max_health: u32,
    speed: f32,
    detection_range: f32,
    cooldown_ms: u32,
    last_attack_ms: u64,
    damage: u32,
}

impl Monster {
    /// Attack reach, constant across levels.
    pub const ATTACK_RANGE: f32 = 40.0;

    /// Spawn a monster scaled to the player's level. Speed, awareness and
    /// damage all grow with level; the attack cooldown shrinks but never
    /// drops below 800ms.
    pub fn spawn(player_level: u32, position: Position) -> Self {
        let l = player_level.saturating_sub(1);
        let max_health = 80 + 16 * l;
        Self {
            position,
            state: MonsterState::Idle,
            level: player_level,
            health: max_health,
            max_health,
            speed: 50.0 + 5.0 * l as f32,
            detection_range: 200.0 + 10.0 * l as f32,
            cooldown_ms: (1000u32.saturating_sub(50 * l)).max(800),
            last_attack_ms: 0,
            damage: 5 + 12 * l / 10,
        }
    }

    /// Advance the monster by one frame.
    ///
    /// Idle until the player enters detection range, walk toward them while
    /// out of attack range, attack when close enough and the cooldown has
    /// elapsed. Returns the raw damage of an attack that lands this frame.
    pub fn update(&mut self, player: Position, now_ms: u64, dt_secs: f32) -> Option<u32> {
        let distance = self.position.distance(player);

        if distance > self.detection_range {
            self.state = MonsterState::Idle;
            return None;
        }

        if distance > Self::ATTACK_RANGE {
            self.state = MonsterState::Walking;
            let step = self.speed * dt_secs;
            if distance > f32::EPSILON {
                self.position.x += (player.x - self.position.x) / distance * step;
                self.position.y += (player.y - self.position.y) / distance * step;
            }
            return None;
        }

        self.state = MonsterState::Attacking;
        if now_ms.saturating_sub(self.last_attack_ms) >= self.cooldown_ms as u64 {
            self.last_attack_ms = now_ms;
            return Some(self.damage);
        }
        None
    }

    /// Apply damage; returns true when this kills the monster.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.health = self.health.saturating_sub(amount);
        self.health == 0
    }
}

/// Damage a monster hit deals through the player's defense. Defense blunts
/// 30% of its value off the hit, with a floor of 1.
pub fn monster_strike_damage(raw: u32, defense: i32) -> u32 {
    let reduction = (defense.max(0) * 3 / 10) as u32;
    raw.saturating_sub(reduction).max(1)
}

/// Player melee damage for one swing: level-scaled with small variance.
pub fn player_strike_damage(level: u32, env: &Env, seed: u64) -> u32 {
    let base = 10 + 2 * level.saturating_sub(1) as i32;
    let variance = env.rng.range_i32(seed, -2, 3);
    (base + variance).max(1) as u32
}

/// Most monsters allowed alive at once for a given player level.
pub fn max_monsters(player_level: u32) -> usize {
    (3 + player_level / 2) as usize
}

/// Experience and loot granted for a skirmish kill.
pub fn monster_death_rewards(
    env: &Env,
    zone: &str,
    player_level: u32,
    seed: u64,
) -> (u32, Option<String>) {
    let exp = 10 + env.rng.range_i32(compute_seed(seed, 0, 0), 0, 4) as u32;
    let loot = if env
        .rng
        .chance(compute_seed(seed, 0, 1), GameConfig::COMBAT_LOOT_PERCENT)
    {
        random_loot_for_zone(env, zone, player_level, compute_seed(seed, 0, 2))
    } else {
        None
    };
    (exp, loot)
}

/// A breakable loot crate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootCrate {
    pub position: Position,
    pub health: u32,
}

impl LootCrate {
    /// Spawn with level-scaled health so higher-level players need about
    /// the same number of swings.
    pub fn spawn(player_level: u32, position: Position, env: &Env, seed: u64) -> Self {
        let l = player_level.saturating_sub(1);
        let min = (2 + l / 2) as i32;
        let max = (6 + 8 * l / 10) as i32;
        Self {
            position,
            health: env.rng.range_i32(seed, min, max).max(1) as u32,
        }
    }

    /// Strike the crate; returns true when it breaks.
    pub fn hit(&mut self, damage: u32) -> bool {
        self.health = self.health.saturating_sub(damage);
        self.health == 0
    }
}
