use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::position::Position;
use crate::types::{ABSOLUTE_SLOTS, CHECKERS_PER_PLAYER, Checker, OUT, Player};
use crate::variant::RuleVariant;

// Absolute slot layout:
//   0       player 1 bar
//   1..=24  track points
//   25      player 1 out
//   26      player 2 bar
//   27      player 2 out

const ABSOLUTE_VIEW: [u8; ABSOLUTE_SLOTS] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
    26, 27,
];

// Display orientations: first row, player 2 out, second row, player 1 out.
const START_TOP_RIGHT: [u8; 26] = [
    12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 27, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
];
const START_TOP_LEFT: [u8; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 27, 24, 23, 22, 21, 20, 19, 18, 17, 16, 15, 14, 13, 25,
];
const START_BOTTOM_LEFT: [u8; 26] = [
    24, 23, 22, 21, 20, 19, 18, 17, 16, 15, 14, 13, 27, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 25,
];
const START_BOTTOM_RIGHT: [u8; 26] = [
    13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 27, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 25,
];

/// Named projections of the absolute slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardView {
    Absolute,
    Player1,
    Player2,
    StartTopRight,
    StartTopLeft,
    StartBottomLeft,
    StartBottomRight,
}

impl BoardView {
    pub fn for_player(player: Player) -> BoardView {
        match player {
            Player::One => BoardView::Player1,
            Player::Two => BoardView::Player2,
        }
    }
}

/// A read-only projection of board slots in some view order.
///
/// Views never copy positions; `get(i)` reads straight from the board.
#[derive(Clone, Copy)]
pub struct View<'a> {
    positions: &'a [Position; ABSOLUTE_SLOTS],
    source: &'static [u8],
    target: &'static [u8],
    mapped: bool,
}

impl<'a> View<'a> {
    pub fn len(&self) -> usize {
        self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    /// Absolute board index behind view index `i`.
    pub fn slot(&self, i: usize) -> usize {
        let t = self.target[i] as usize;
        if self.mapped {
            self.source[t] as usize
        } else {
            t
        }
    }

    pub fn get(&self, i: usize) -> &'a Position {
        &self.positions[self.slot(i)]
    }

    /// View index of an absolute slot, if the view shows it.
    pub fn index_of(&self, absolute: usize) -> Option<usize> {
        (0..self.len()).find(|&i| self.slot(i) == absolute)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Position> {
        let view = *self;
        (0..view.len()).map(move |i| view.get(i))
    }
}

/// The 28 absolute slots plus the rule variant that owns their geometry.
///
/// Cloning copies every stack; the clone shares nothing mutable with its
/// source and is flagged with [`Board::is_clone`]. Equality and hashing
/// look at slot contents only.
#[derive(Debug)]
pub struct Board {
    variant: RuleVariant,
    positions: [Position; ABSOLUTE_SLOTS],
    clone_depth: u32,
}

impl Board {
    /// Board with the variant's starting layout for both players.
    pub fn new(variant: RuleVariant) -> Self {
        let mut board = Self::empty(variant);
        for player in [Player::One, Player::Two] {
            for &relative in variant.player_config(player).initial_layout {
                let slot = board.slot_of(player, relative as usize);
                let placed = board.positions[slot].push(Checker::of(player));
                debug_assert!(placed);
            }
        }
        board
    }

    pub fn empty(variant: RuleVariant) -> Self {
        Self {
            variant,
            positions: std::array::from_fn(Position::new),
            clone_depth: 0,
        }
    }

    /// Board with custom relative positions per player (0 = bar, 25 = out).
    pub fn with_layout(
        variant: RuleVariant,
        first: &[usize],
        second: &[usize],
    ) -> Result<Self, BoardError> {
        let mut board = Self::empty(variant);
        board.place_checkers(Player::One, first)?;
        board.place_checkers(Player::Two, second)?;
        Ok(board)
    }

    /// Push one checker per entry onto the player's relative slots.
    pub fn place_checkers(&mut self, player: Player, layout: &[usize]) -> Result<(), BoardError> {
        if let Some(&bad) = layout.iter().find(|&&r| r > OUT) {
            return Err(BoardError::InvalidSlot(bad));
        }
        let count = self.checker_count(player) + layout.len();
        if count > CHECKERS_PER_PLAYER {
            return Err(BoardError::TooManyCheckers {
                player,
                count,
                max: CHECKERS_PER_PLAYER,
            });
        }
        for &relative in layout {
            let slot = self.slot_of(player, relative);
            let placed = self.positions[slot].push(Checker::of(player));
            debug_assert!(placed);
        }
        Ok(())
    }

    pub fn variant(&self) -> RuleVariant {
        self.variant
    }

    pub fn is_clone(&self) -> bool {
        self.clone_depth > 0
    }

    pub fn position(&self, absolute: usize) -> &Position {
        &self.positions[absolute]
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Absolute index of a player's relative slot.
    pub fn slot_of(&self, player: Player, relative: usize) -> usize {
        self.variant.player_config(player).absolute(relative)
    }

    /// Position at the player's relative slot.
    pub fn relative(&self, player: Player, relative: usize) -> &Position {
        &self.positions[self.slot_of(player, relative)]
    }

    /// Checkers of the player anywhere on the board, bar and out included.
    pub fn checker_count(&self, player: Player) -> usize {
        self.positions.iter().map(|p| p.count_of(player)).sum()
    }

    fn view_table(&self, view: BoardView) -> &'static [u8] {
        match view {
            BoardView::Absolute => &ABSOLUTE_VIEW,
            BoardView::Player1 => self.variant.player_config(Player::One).absolute_positions,
            BoardView::Player2 => self.variant.player_config(Player::Two).absolute_positions,
            BoardView::StartTopRight => &START_TOP_RIGHT,
            BoardView::StartTopLeft => &START_TOP_LEFT,
            BoardView::StartBottomLeft => &START_BOTTOM_LEFT,
            BoardView::StartBottomRight => &START_BOTTOM_RIGHT,
        }
    }

    /// Slots in the player's movement order: 0 bar, 1..=24 track, 25 out,
    /// then the opponent's bar and out.
    pub fn player_view(&self, player: Player) -> View<'_> {
        self.view(BoardView::for_player(player))
    }

    pub fn view(&self, view: BoardView) -> View<'_> {
        let table = self.view_table(view);
        View {
            positions: &self.positions,
            source: table,
            target: table,
            mapped: false,
        }
    }

    /// Re-project `source` through the index order of `target`: entry `i` is
    /// the slot that `source` shows at index `target[i]`.
    pub fn mapped_view(&self, source: BoardView, target: BoardView) -> Result<View<'_>, BoardError> {
        if source == target {
            return Ok(self.view(target));
        }
        let source_table = self.view_table(source);
        let target_table = self.view_table(target);
        if let Some(&index) = target_table.iter().find(|&&t| t as usize >= source_table.len()) {
            return Err(BoardError::IncompatibleViews {
                index: index as usize,
            });
        }
        Ok(View {
            positions: &self.positions,
            source: source_table,
            target: target_table,
            mapped: true,
        })
    }

    pub(crate) fn position_mut(&mut self, absolute: usize) -> &mut Position {
        &mut self.positions[absolute]
    }

    /// Move the top checker of one absolute slot onto another.
    pub(crate) fn transfer(&mut self, from: usize, to: usize) -> Option<Checker> {
        let checker = self.positions[from].pop()?;
        if self.positions[to].push(checker) {
            Some(checker)
        } else {
            self.positions[from].push(checker);
            None
        }
    }
}

impl Clone for Board {
    fn clone(&self) -> Self {
        Self {
            variant: self.variant,
            positions: self.positions.clone(),
            clone_depth: self.clone_depth + 1,
        }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.positions == other.positions
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.positions.hash(state);
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
