//! Narrative outcome pipeline: parse directives, then apply them.

mod parse;
mod resolve;

pub use parse::{OutcomeToken, parse_outcome};
pub use resolve::{OutcomeResolution, resolve_outcome, typed_damage};
