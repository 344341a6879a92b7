//! Error types for the rule engine.
//!
//! Illegal moves are not errors: they come back as an unsuccessful
//! [`Move`](crate::moves::Move). The enums here cover broken invariants
//! (undo on a diverged board, mismatched dice) and engine defects.

use std::path::PathBuf;

use crate::types::Player;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("relative slot {0} is outside 0..=25")]
    InvalidSlot(usize),

    #[error("{player} has {count} checkers in the layout, at most {max} allowed")]
    TooManyCheckers {
        player: Player,
        count: usize,
        max: usize,
    },

    #[error("target view index {index} has no entry in the source view")]
    IncompatibleViews { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UndoError {
    #[error("only a successful move can be undone")]
    NotSuccessful,

    #[error("move was made by {mover}, not {player}")]
    PlayerMismatch { player: Player, mover: Player },

    #[error("die {index} does not match the move (value {value})")]
    DieMismatch { index: usize, value: u8 },

    #[error("slot {slot} does not hold a checker of {player}")]
    ForeignChecker { player: Player, slot: usize },

    #[error("checker recorded by the move is no longer at slot {slot}")]
    Diverged { slot: usize },

    #[error("a captured checker was recorded but the variant has no bar")]
    CaptureWithoutBar,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The request cannot be carried out; state is left unchanged.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// A dice source produced a value outside 1..=6.
    #[error("dice source produced {0}, expected 1..=6")]
    InvalidDieValue(u8),

    /// An internal contract was broken. The game must not continue.
    #[error("engine defect: {0}")]
    Defect(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
