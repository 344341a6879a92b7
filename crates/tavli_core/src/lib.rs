//! Rule engine for the tavli family of backgammon games: Portes, Plakoto
//! and Fevga.
//!
//! The crate models the board, applies and undoes single dice, and
//! decides which dice of a roll are playable. Turn loops, rendering and
//! player input are left to the caller.

// Move attempts on search clones are noisy; keep them at trace level.
macro_rules! board_event {
    ($board:expr, $($arg:tt)+) => {
        if $board.is_clone() {
            tracing::trace!($($arg)+)
        } else {
            tracing::debug!($($arg)+)
        }
    };
}

pub mod board;
pub mod choice;
pub mod config;
pub mod dice;
pub mod dice_source;
pub mod error;
pub mod game;
pub mod moves;
pub mod position;
pub mod search;
pub mod types;
pub mod variant;

pub use board::{Board, BoardView, View};
pub use choice::{DiceChoice, DiceOptions};
pub use config::GameConfig;
pub use dice::{DiceSet, Die, DieStatus};
pub use dice_source::{DiceSource, RandomDice, ScriptedDice};
pub use error::{BoardError, ConfigError, EngineError, UndoError};
pub use game::Game;
pub use moves::{
    Move, MoveFailure, apply_die, game_value, is_all_checkers_collected, is_collection_phase, undo,
};
pub use position::Position;
pub use search::{any_move_possible, find_playable_dice};
pub use types::*;
pub use variant::{GamePlayerConfig, RuleVariant};

// =============================================================================
// Strategy trait: implemented by computer players
// =============================================================================

/// A computer player.
///
/// The game is the legality oracle: moves go through [`Game::play`], which
/// rejects anything illegal without changing state.
pub trait Strategy {
    /// Play one turn with the dice options found for `player`.
    ///
    /// Returns the successful moves in the order they were made. The
    /// statuses of the played option are committed to the game's roll.
    fn play_turn(
        &mut self,
        game: &mut Game,
        player: Player,
        choice: &DiceChoice,
    ) -> Result<Vec<Move>, EngineError>;

    /// Name used in logs.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
