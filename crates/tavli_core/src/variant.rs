//! The three rule sets and everything that differs between them: track
//! geometry per player, starting layouts, target legality and the capture
//! side effect.

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardView};
use crate::dice::DiceSet;
use crate::moves::Move;
use crate::types::{ABSOLUTE_SLOTS, BAR, LAST_POINT, Player};

const FIRST_PLAYER_SLOTS: [u8; ABSOLUTE_SLOTS] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
    26, 27,
];

// Facing variants: player 2 runs the track backwards.
const FACING_SECOND_SLOTS: [u8; ABSOLUTE_SLOTS] = [
    26, 24, 23, 22, 21, 20, 19, 18, 17, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 27,
    0, 25,
];

// Parallel variant: player 2 starts half a board ahead and wraps around.
const PARALLEL_SECOND_SLOTS: [u8; ABSOLUTE_SLOTS] = [
    26, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 27,
    0, 25,
];

const STACKED_LAYOUT: [u8; 15] = [1; 15];
const SPREAD_LAYOUT: [u8; 15] = [1, 1, 12, 12, 12, 12, 12, 17, 17, 17, 19, 19, 19, 19, 19];

/// Relative to absolute slot mapping and starting layout for one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GamePlayerConfig {
    pub player: Player,
    pub absolute_positions: &'static [u8; ABSOLUTE_SLOTS],
    pub initial_layout: &'static [u8],
}

impl GamePlayerConfig {
    pub fn absolute(&self, relative: usize) -> usize {
        self.absolute_positions[relative] as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleVariant {
    /// Fevga: both players run the same direction, half a board apart.
    /// A single checker holds a point.
    #[serde(rename = "fevga", alias = "parallel_capture")]
    ParallelCapture,
    /// Plakoto: players face each other; landing on a lone opposing
    /// checker pins it underneath.
    #[serde(rename = "plakoto", alias = "facing_pin")]
    FacingPin,
    /// Portes: players face each other; a lone opposing checker is hit
    /// to the bar and must re-enter before anything else moves.
    #[serde(rename = "portes", alias = "facing_capture")]
    FacingCapture,
}

impl RuleVariant {
    pub const ALL: [RuleVariant; 3] = [
        RuleVariant::ParallelCapture,
        RuleVariant::FacingPin,
        RuleVariant::FacingCapture,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RuleVariant::ParallelCapture => "Fevga",
            RuleVariant::FacingPin => "Plakoto",
            RuleVariant::FacingCapture => "Portes",
        }
    }

    pub fn player_config(self, player: Player) -> GamePlayerConfig {
        let absolute_positions = match (self, player) {
            (_, Player::One) => &FIRST_PLAYER_SLOTS,
            (RuleVariant::ParallelCapture, Player::Two) => &PARALLEL_SECOND_SLOTS,
            (_, Player::Two) => &FACING_SECOND_SLOTS,
        };
        let initial_layout: &'static [u8] = match self {
            RuleVariant::FacingCapture => &SPREAD_LAYOUT,
            _ => &STACKED_LAYOUT,
        };
        GamePlayerConfig {
            player,
            absolute_positions,
            initial_layout,
        }
    }

    /// Whether hit checkers wait on a bar and must re-enter first.
    pub fn has_bar_slot(self) -> bool {
        matches!(self, RuleVariant::FacingCapture)
    }

    /// Hook for a stake increase after all dice were used. No variant
    /// enables it.
    pub fn has_doubling_boost(self, _dice: &DiceSet) -> bool {
        false
    }

    pub fn default_board_view(self) -> BoardView {
        match self {
            RuleVariant::FacingPin => BoardView::StartBottomRight,
            _ => BoardView::StartTopRight,
        }
    }

    /// The orientation the opponent sees when one player looks at `view`.
    pub fn inverse_board_view(self, view: BoardView) -> BoardView {
        match self {
            RuleVariant::ParallelCapture => match view {
                BoardView::StartTopRight => BoardView::StartBottomLeft,
                BoardView::StartTopLeft => BoardView::StartBottomRight,
                BoardView::StartBottomLeft => BoardView::StartTopRight,
                BoardView::StartBottomRight => BoardView::StartTopLeft,
                other => other,
            },
            RuleVariant::FacingPin | RuleVariant::FacingCapture => match view {
                BoardView::StartTopRight => BoardView::StartBottomRight,
                BoardView::StartTopLeft => BoardView::StartBottomLeft,
                BoardView::StartBottomLeft => BoardView::StartTopLeft,
                BoardView::StartBottomRight => BoardView::StartTopRight,
                other => other,
            },
        }
    }

    /// Whether a checker of `player` may land on relative slot `to` coming
    /// from `from`. Only track targets (1..=24) are ever valid.
    pub fn is_valid_move_target(self, player: Player, board: &Board, from: usize, to: usize) -> bool {
        if to == BAR || to > LAST_POINT {
            return false;
        }
        let target = board.relative(player, to);
        match self {
            RuleVariant::FacingPin => target.len() < 2 || target.is_topped_by(player),
            RuleVariant::FacingCapture => {
                let bar_pending = from != BAR && !board.relative(player, BAR).is_empty();
                !bar_pending && (target.len() < 2 || target.is_topped_by(player))
            }
            RuleVariant::ParallelCapture => {
                let target_ok = target.is_empty() || target.is_topped_by(player);
                target_ok
                    && lead_checker_released(player, board, from)
                    && leaves_gap_in_first_six(player, board, from, to)
            }
        }
    }

    /// Side effect applied right before a legal track move: in Portes a
    /// lone opposing checker on the target goes to its owner's bar.
    pub(crate) fn before_move(self, player: Player, board: &mut Board, mv: &mut Move) {
        if self != RuleVariant::FacingCapture {
            return;
        }
        let target = board.slot_of(player, mv.to());
        let pos = board.position(target);
        if pos.len() != 1 || pos.is_topped_by(player) {
            return;
        }
        let bar = board.slot_of(player.other(), BAR);
        mv.captured = board.transfer(target, bar);
    }
}

impl std::fmt::Display for RuleVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Fevga: no second checker moves until the leading one has passed point
/// 12. The leading checker itself may always move.
fn lead_checker_released(player: Player, board: &Board, from: usize) -> bool {
    let view = board.player_view(player);
    (1..=LAST_POINT)
        .rev()
        .find(|&i| view.get(i).is_topped_by(player))
        .is_some_and(|lead| lead > 12 || lead == from)
}

/// Fevga: the mover may not close all of points 1..=6. Moving onto an
/// already held point changes nothing; vacating the source reopens a gap.
fn leaves_gap_in_first_six(player: Player, board: &Board, from: usize, to: usize) -> bool {
    if to > 6 {
        return true;
    }
    let view = board.player_view(player);
    let mut open = true;
    for i in 1..=6 {
        let pos = view.get(i);
        if !pos.is_topped_by(player) {
            if i == to {
                open = false;
            } else {
                return true;
            }
        } else if i == from && pos.len() == 1 {
            return true;
        }
    }
    open
}

#[cfg(test)]
#[path = "variant_tests.rs"]
mod variant_tests;
