//! Which dice can the player use this turn?
//!
//! Every pass runs on a clone of the board and the dice, so the caller's
//! state is never touched (apart from blocking all dice when nothing can
//! move). The search commits to the first checker that accepts a die and
//! never backtracks: it only has to prove that a die is playable, not find
//! the best sequence.

use tracing::debug;

use crate::board::Board;
use crate::choice::{DiceChoice, DiceOptions};
use crate::dice::DiceSet;
use crate::error::EngineError;
use crate::moves::apply_die;
use crate::types::{BAR, LAST_POINT, Player};

/// Checkers waiting on the player's bar, if the variant uses one and it is
/// occupied. They must all enter before anything else moves.
pub fn mandatory_checkers(player: Player, board: &Board) -> Option<usize> {
    if !board.variant().has_bar_slot() {
        return None;
    }
    let bar = board.relative(player, BAR);
    (!bar.is_empty()).then(|| bar.len())
}

/// Relative slots a move may start from: only the bar while it is
/// occupied, otherwise bar and track.
pub fn candidate_slots(player: Player, board: &Board) -> Vec<usize> {
    if mandatory_checkers(player, board).is_some() {
        vec![BAR]
    } else {
        (BAR..=LAST_POINT).collect()
    }
}

/// Quick check whether any single die moves any checker. When none does,
/// every die in `dice` is marked Blocked.
pub fn any_move_possible(player: Player, board: &Board, dice: &mut DiceSet) -> bool {
    let mut test_board = board.clone();
    let mut test_dice = dice.clone();

    for from in candidate_slots(player, &test_board) {
        if !test_board.relative(player, from).is_topped_by(player) {
            continue;
        }
        for die in 0..test_dice.len() {
            if apply_die(player, &mut test_board, &mut test_dice, from, die).is_success() {
                return true;
            }
        }
    }

    dice.block_all();
    debug!(%player, dice = %dice, "no move possible");
    false
}

/// Determine the playable dice for a freshly rolled `dice`.
///
/// The result holds one option, or two when the order of the dice decides
/// which one can be played. If nothing is playable the real dice are
/// marked Blocked and [`DiceChoice::NoMove`] is returned.
pub fn find_playable_dice(
    player: Player,
    board: &Board,
    dice: &mut DiceSet,
) -> Result<DiceChoice, EngineError> {
    debug!(%player, dice = %dice, "searching playable dice");
    if !any_move_possible(player, board, dice) {
        return Ok(DiceChoice::NoMove);
    }

    let mut marked = dice.clone();
    let mut settled = None;

    if let Some(mandatory) = mandatory_checkers(player, board) {
        let options = find_dice(true, player, board, &marked)?;
        marked = options
            .first()
            .cloned()
            .ok_or_else(|| EngineError::Defect("bar entry search found no option".into()))?;
        let used = marked.used_count();
        if used < mandatory {
            debug!(%player, used, mandatory, "not every bar checker can enter");
            settled = Some(options);
        } else if marked.all_used() {
            settled = Some(options);
        } else if used > mandatory {
            return Err(EngineError::Defect(format!(
                "{used} bar entries for {mandatory} checkers on the bar"
            )));
        }
    }

    let mut options = match settled {
        Some(options) => options,
        None => find_dice(false, player, board, &marked)?,
    };
    options.convert_to_play()?;

    let choice = options.into_choice();
    if choice.is_no_move() {
        dice.block_all();
    }
    debug!(%player, choice = %choice, "playable dice");
    Ok(choice)
}

// Roll order first; the reverse order only matters for non-doubles that
// could not use every die.
fn find_dice(
    bar_only: bool,
    player: Player,
    board: &Board,
    dice: &DiceSet,
) -> Result<DiceOptions, EngineError> {
    let mut options = DiceOptions::new();

    let forward = run_pass(bar_only, player, board, dice, false)?;
    let complete = forward.all_used();
    options.add_option(forward)?;

    if !dice.is_double() && !complete {
        let backward = run_pass(bar_only, player, board, dice, true)?;
        options.add_option(backward)?;
    }
    Ok(options)
}

fn run_pass(
    bar_only: bool,
    player: Player,
    board: &Board,
    dice: &DiceSet,
    reversed: bool,
) -> Result<DiceSet, EngineError> {
    let mut test_board = board.clone();
    let mut test_dice = dice.clone();

    let candidates = if bar_only {
        vec![BAR]
    } else {
        replay_bar_entries(player, &mut test_board, &test_dice)?;
        (BAR..=LAST_POINT).collect()
    };

    let order = test_dice.available_indices(reversed);
    play_in_order(player, &mut test_board, &mut test_dice, &candidates, &order);
    Ok(test_dice)
}

// Dice marked Used by the bar-only search are entries that must happen
// first; play them again on the working board.
fn replay_bar_entries(player: Player, board: &mut Board, dice: &DiceSet) -> Result<(), EngineError> {
    if dice.used_count() == 0 || mandatory_checkers(player, board).is_none() {
        return Ok(());
    }
    let mut replay = dice.clone();
    replay.convert_to_play()?;
    for die in replay.available_indices(false) {
        if !apply_die(player, board, &mut replay, BAR, die).is_success() {
            return Err(EngineError::Defect(format!(
                "cannot replay bar entry with die {die} of {dice}"
            )));
        }
    }
    Ok(())
}

fn play_in_order(
    player: Player,
    board: &mut Board,
    dice: &mut DiceSet,
    candidates: &[usize],
    order: &[usize],
) {
    let Some((&die, rest)) = order.split_first() else {
        return;
    };
    for &from in candidates {
        if !board.relative(player, from).is_topped_by(player) {
            continue;
        }
        if apply_die(player, board, dice, from, die).is_success() {
            if !rest.is_empty() {
                play_in_order(player, board, dice, candidates, rest);
            }
            return;
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
