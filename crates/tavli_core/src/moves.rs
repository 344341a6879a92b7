//! Applying one die to one checker, and taking it back.

use crate::board::Board;
use crate::dice::{DiceSet, DieStatus};
use crate::error::UndoError;
use crate::types::{BAR, Checker, HOME_START, LAST_POINT, OUT, Player};

/// Why a die could not be applied. Not an error: the caller simply tries
/// another checker or die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveFailure {
    #[error("die is not available")]
    DieNotAvailable,
    #[error("no own checker on the start position")]
    InvalidStart,
    #[error("checkers on the bar must enter first")]
    MandatoryBar,
    #[error("a checker on a higher point must be borne off first")]
    BearOffBlocked,
    #[error("target position is not reachable")]
    InvalidTarget,
}

/// Record of one die application, kept so the move can be undone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub player: Player,
    /// Relative start slot.
    pub from: usize,
    /// Index of the die in its [`DiceSet`].
    pub die: usize,
    pub value: u8,
    pub success: bool,
    pub failure: Option<MoveFailure>,
    /// Opposing checker sent to the bar by this move.
    pub captured: Option<Checker>,
    /// Checker taken off the board by this move.
    pub borne_off: Option<Checker>,
}

impl Move {
    pub fn new(player: Player, from: usize, die: usize, value: u8) -> Self {
        Self {
            player,
            from,
            die,
            value,
            success: false,
            failure: None,
            captured: None,
            borne_off: None,
        }
    }

    /// Relative target slot; beyond 24 means bearing off.
    pub fn to(&self) -> usize {
        self.from.saturating_add(self.value as usize)
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    fn fail(mut self, reason: MoveFailure) -> Self {
        self.failure = Some(reason);
        self
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.to() > LAST_POINT {
            write!(f, "{}/off ({})", self.from, self.value)
        } else {
            write!(f, "{}/{} ({})", self.from, self.to(), self.value)
        }
    }
}

/// Move the top checker on the player's relative slot `from` by the value
/// of die `die`.
///
/// Never panics on bad input: an unsuccessful [`Move`] carrying the reason
/// is returned and neither board nor dice are touched.
pub fn apply_die(player: Player, board: &mut Board, dice: &mut DiceSet, from: usize, die: usize) -> Move {
    let value = dice.get(die).map_or(0, |d| d.value());
    let mut mv = Move::new(player, from, die, value);

    if !dice.get(die).is_some_and(|d| d.is_available()) {
        board_event!(board, %player, die, "die already used");
        return mv.fail(MoveFailure::DieNotAvailable);
    }
    if from >= OUT || !board.relative(player, from).is_topped_by(player) {
        board_event!(board, %player, from, "invalid start position");
        return mv.fail(MoveFailure::InvalidStart);
    }

    let variant = board.variant();
    if variant.has_bar_slot() && from != BAR && !board.relative(player, BAR).is_empty() {
        board_event!(board, %player, from, "bar checkers must enter first");
        return mv.fail(MoveFailure::MandatoryBar);
    }

    let to = mv.to();
    let from_slot = board.slot_of(player, from);
    if is_collection_phase(player, board) && to > LAST_POINT {
        if !bear_off_allowed(player, board, from, to) {
            board_event!(board, %player, from, value, "higher checker must be borne off first");
            return mv.fail(MoveFailure::BearOffBlocked);
        }
        board_event!(board, %player, from, value, "bear off");
        let out = board.slot_of(player, OUT);
        mv.borne_off = board.transfer(from_slot, out);
    } else if to <= LAST_POINT && variant.is_valid_move_target(player, board, from, to) {
        board_event!(board, %player, from, to, "move");
        variant.before_move(player, board, &mut mv);
        let to_slot = board.slot_of(player, to);
        let moved = board.transfer(from_slot, to_slot);
        debug_assert!(moved.is_some());
    } else {
        board_event!(board, %player, from, to, "invalid target position");
        return mv.fail(MoveFailure::InvalidTarget);
    }

    dice.set_status(die, DieStatus::Used);
    mv.success = true;
    mv
}

/// Exact inverse of a successful [`apply_die`].
///
/// Every check runs before the board is touched, so on error nothing has
/// changed. On success the die is Available again and the move is reset
/// so it cannot be undone twice.
pub fn undo(player: Player, board: &mut Board, dice: &mut DiceSet, mv: &mut Move) -> Result<(), UndoError> {
    if !mv.success {
        return Err(UndoError::NotSuccessful);
    }
    if player != mv.player {
        return Err(UndoError::PlayerMismatch {
            player,
            mover: mv.player,
        });
    }
    if !dice
        .get(mv.die)
        .is_some_and(|d| d.value() == mv.value && d.status() == DieStatus::Used)
    {
        return Err(UndoError::DieMismatch {
            index: mv.die,
            value: mv.value,
        });
    }
    if mv.from >= OUT {
        return Err(UndoError::Diverged { slot: mv.from });
    }
    if mv.borne_off.is_none() && mv.to() > LAST_POINT {
        return Err(UndoError::Diverged { slot: mv.to() });
    }

    let from_slot = board.slot_of(player, mv.from);
    if let Some(checker) = mv.borne_off {
        let out = board.slot_of(player, OUT);
        if !checker.is_owned_by(player) {
            return Err(UndoError::ForeignChecker { player, slot: out });
        }
        if board.position(out).top() != Some(checker) {
            return Err(UndoError::Diverged { slot: out });
        }
        board.transfer(out, from_slot);
    } else {
        let to_slot = board.slot_of(player, mv.to());
        if !board.position(to_slot).is_topped_by(player) {
            return Err(UndoError::ForeignChecker {
                player,
                slot: to_slot,
            });
        }
        let bar = match mv.captured {
            Some(hit) => {
                if !board.variant().has_bar_slot() {
                    return Err(UndoError::CaptureWithoutBar);
                }
                let bar = board.slot_of(player.other(), BAR);
                if board.position(bar).top() != Some(hit) {
                    return Err(UndoError::Diverged { slot: bar });
                }
                Some(bar)
            }
            None => None,
        };
        board.transfer(to_slot, from_slot);
        if let Some(bar) = bar {
            board.transfer(bar, to_slot);
        }
    }

    board_event!(board, %player, mv = %mv, "undo");
    dice.set_status(mv.die, DieStatus::Available);
    mv.success = false;
    mv.captured = None;
    mv.borne_off = None;
    Ok(())
}

/// Whether the player may bear off: no checker (top or pinned) left on
/// relative 0..=18. Variants without a bar stay in the phase once the
/// first checker is out.
pub fn is_collection_phase(player: Player, board: &Board) -> bool {
    let view = board.player_view(player);
    if !board.variant().has_bar_slot() && !view.get(OUT).is_empty() {
        return true;
    }
    !(BAR..HOME_START).any(|i| view.get(i).has_checker_of(player))
}

// Exact throws always work; an overshoot only when no own checker sits on
// a point further from home (19..from).
fn bear_off_allowed(player: Player, board: &Board, from: usize, to: usize) -> bool {
    if from < HOME_START {
        return false;
    }
    if to == OUT {
        return true;
    }
    let view = board.player_view(player);
    !(HOME_START..from).any(|i| view.get(i).is_topped_by(player))
}

/// Whether every checker the player owns has been borne off.
pub fn is_all_checkers_collected(player: Player, board: &Board) -> bool {
    let total = board.checker_count(player);
    total > 0 && board.relative(player, OUT).len() == total
}

/// Points won by `winner`: 1 if the loser bore off at least one checker,
/// otherwise 2.
pub fn game_value(winner: Player, board: &Board) -> u8 {
    if board.relative(winner.other(), OUT).is_empty() {
        2
    } else {
        1
    }
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
