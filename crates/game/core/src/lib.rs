//! Deterministic survival-RPG simulation core.
//!
//! This crate owns the rules: stats and survival decay, the narrative
//! outcome pipeline, leveling, both combat systems, the Village economy
//! and the mode state machine, all wrapped in [`session::GameSession`].
//! It performs no I/O. Content and randomness come in through the oracle
//! traits in [`env`]; a presentation layer feeds actions in and renders
//! the events that come out.
//!
//! Given the same game seed and action sequence, two sessions produce
//! identical state. All formula arithmetic is integer-only.

pub mod clock;
pub mod combat;
pub mod config;
pub mod economy;
pub mod env;
pub mod error;
pub mod leveling;
pub mod mode;
pub mod outcome;
pub mod session;
pub mod state;
pub mod zone;

#[cfg(test)]
mod testutil;

pub use clock::{GameClock, TimeOfDay};
pub use config::GameConfig;
pub use error::SessionError;
pub use mode::Mode;
pub use session::{
    CarryState, GameSession, InteractTarget, PlayerAction, SessionEvent, StationKind,
};
