//! Error types surfaced by session and economy operations.

use crate::mode::Mode;

/// Errors returned when an action or economy operation cannot proceed.
///
/// Every variant leaves session state untouched; callers can surface the
/// message and retry without repair.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionError {
    #[error("not enough oromozi: need {needed}, have {have}")]
    InsufficientOromozi { needed: u32, have: u32 },

    #[error("item not held: {0}")]
    MissingItem(String),

    #[error("missing ingredients for {recipe}: {missing}")]
    MissingIngredients { recipe: String, missing: String },

    #[error("unknown item: {0}")]
    UnknownItem(String),

    #[error("unknown recipe: {0}")]
    UnknownRecipe(String),

    #[error("unknown zone: {0}")]
    UnknownZone(String),

    #[error("{0} cannot be deposited")]
    NotDepositable(String),

    #[error("no entry at index {0}")]
    InvalidIndex(usize),

    #[error("action not available in {0} mode")]
    WrongMode(Mode),

    #[error("no battle in progress")]
    NoBattle,

    #[error("camp requires 2 Stick and 1 Cloth")]
    CampMaterialsMissing,

    #[error("camp can only be set up as night approaches or after dark")]
    CampNotAvailable,
}
