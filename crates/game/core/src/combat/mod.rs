//! Combat systems: staged turn-based battles and the real-time night
//! skirmish loop.

pub mod battle;
pub mod skirmish;

pub use battle::{BattleAction, BattleOutcome, BattleState, BattleStats, Enemy, TurnReport};
pub use skirmish::{Direction, LootCrate, Monster, MonsterState, Position};
