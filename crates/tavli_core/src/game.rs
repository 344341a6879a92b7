//! One game: authoritative board, current roll and the dice source.
//!
//! Turn sequencing and player input live outside; this type answers the
//! questions a turn loop asks and applies the moves it decides on.

use tracing::{debug, info};

use crate::board::Board;
use crate::choice::DiceChoice;
use crate::config::GameConfig;
use crate::dice::{DiceSet, checked_value};
use crate::dice_source::DiceSource;
use crate::error::{EngineError, UndoError};
use crate::moves::{self, Move};
use crate::search;
use crate::types::Player;
use crate::variant::RuleVariant;

pub struct Game {
    board: Board,
    dice: DiceSet,
    source: Box<dyn DiceSource>,
    last_move: Option<Move>,
}

impl Game {
    pub fn new(variant: RuleVariant, source: Box<dyn DiceSource>) -> Self {
        Self::with_board(Board::new(variant), source)
    }

    /// Start from an arbitrary position, e.g. a custom layout.
    pub fn with_board(board: Board, source: Box<dyn DiceSource>) -> Self {
        info!(variant = %board.variant(), "new game");
        Self {
            board,
            dice: DiceSet::default(),
            source,
            last_move: None,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.variant, Box::new(config.dice_source()))
    }

    pub fn variant(&self) -> RuleVariant {
        self.board.variant()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current roll with its authoritative statuses.
    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.last_move.as_ref()
    }

    pub fn roll(&mut self) -> Result<&DiceSet, EngineError> {
        let dice = DiceSet::roll(self.source.as_mut())?;
        self.set_dice(dice);
        Ok(&self.dice)
    }

    /// Replace the current roll, e.g. when replaying a recorded game.
    pub fn set_dice(&mut self, dice: DiceSet) {
        debug!(dice = %dice, "dice set");
        self.dice = dice;
        self.last_move = None;
    }

    /// One die per player until they differ; the higher one starts.
    pub fn starting_player(&mut self) -> Result<Player, EngineError> {
        loop {
            let first = checked_value(self.source.roll())?;
            let second = checked_value(self.source.roll())?;
            if first != second {
                let starter = if first > second { Player::One } else { Player::Two };
                info!(first, second, %starter, "starting player decided");
                return Ok(starter);
            }
        }
    }

    pub fn any_move_possible(&mut self, player: Player) -> bool {
        search::any_move_possible(player, &self.board, &mut self.dice)
    }

    pub fn find_playable_dice(&mut self, player: Player) -> Result<DiceChoice, EngineError> {
        search::find_playable_dice(player, &self.board, &mut self.dice)
    }

    /// Apply die `die` of the chosen option `selected` to the checker on
    /// relative slot `from`. A successful move can be taken back with
    /// [`Game::undo_last`].
    pub fn play(&mut self, player: Player, selected: &mut DiceSet, from: usize, die: usize) -> Move {
        let mv = moves::apply_die(player, &mut self.board, selected, from, die);
        if mv.is_success() {
            self.last_move = Some(mv);
        }
        mv
    }

    /// Like [`Game::play`] but picks the first unused die showing `value`.
    pub fn play_value(
        &mut self,
        player: Player,
        selected: &mut DiceSet,
        from: usize,
        value: u8,
    ) -> Option<Move> {
        let die = selected.unused(value)?;
        Some(self.play(player, selected, from, die))
    }

    pub fn undo_last(&mut self, player: Player, selected: &mut DiceSet) -> Result<Move, UndoError> {
        let mut mv = self.last_move.ok_or(UndoError::NotSuccessful)?;
        let undone = mv;
        moves::undo(player, &mut self.board, selected, &mut mv)?;
        self.last_move = None;
        Ok(undone)
    }

    /// Copy the statuses of the played option back onto the current roll.
    pub fn commit(&mut self, selected: &DiceSet) -> Result<(), EngineError> {
        selected.inherit_status(&mut self.dice)?;
        self.last_move = None;
        Ok(())
    }

    pub fn is_collection_phase(&self, player: Player) -> bool {
        moves::is_collection_phase(player, &self.board)
    }

    pub fn is_all_checkers_collected(&self, player: Player) -> bool {
        moves::is_all_checkers_collected(player, &self.board)
    }

    pub fn game_value(&self, winner: Player) -> u8 {
        moves::game_value(winner, &self.board)
    }

    pub fn has_doubling_boost(&self) -> bool {
        self.variant().has_doubling_boost(&self.dice)
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
