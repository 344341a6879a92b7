use crate::types::{CHECKERS_PER_PLAYER, Checker, Player, PointColor};

/// Largest stack a slot can hold: every checker of both players.
pub const MAX_STACK: usize = 2 * CHECKERS_PER_PLAYER;

/// One board slot: a stack of checkers, bottom first.
///
/// The top checker is the one that moves and decides ownership of the
/// point. The bottom checker matters for pins: a lone checker covered by
/// an opponent stays on the slot but cannot move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    index: u8,
    len: u8,
    stack: [Option<Checker>; MAX_STACK],
}

impl Position {
    pub fn new(absolute: usize) -> Self {
        Self {
            index: absolute as u8,
            len: 0,
            stack: [None; MAX_STACK],
        }
    }

    /// Absolute board index of this slot.
    pub fn index(&self) -> usize {
        self.index as usize
    }

    pub fn color(&self) -> PointColor {
        PointColor::for_slot(self.index())
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn top(&self) -> Option<Checker> {
        self.len.checked_sub(1).and_then(|i| self.stack[i as usize])
    }

    pub fn bottom(&self) -> Option<Checker> {
        if self.is_empty() { None } else { self.stack[0] }
    }

    /// True when the player's checker is on top, i.e. the player controls the slot.
    pub fn is_topped_by(&self, player: Player) -> bool {
        self.top().is_some_and(|c| c.is_owned_by(player))
    }

    /// True when the player owns the top or the (possibly pinned) bottom checker.
    pub fn has_checker_of(&self, player: Player) -> bool {
        self.is_topped_by(player) || self.bottom().is_some_and(|c| c.is_owned_by(player))
    }

    /// Checkers bottom to top.
    pub fn checkers(&self) -> impl Iterator<Item = Checker> + '_ {
        self.stack[..self.len()].iter().flatten().copied()
    }

    pub fn count_of(&self, player: Player) -> usize {
        self.checkers().filter(|c| c.is_owned_by(player)).count()
    }

    /// Returns false when the stack is already full.
    pub(crate) fn push(&mut self, checker: Checker) -> bool {
        if self.len() == MAX_STACK {
            return false;
        }
        self.stack[self.len()] = Some(checker);
        self.len += 1;
        true
    }

    pub(crate) fn pop(&mut self) -> Option<Checker> {
        let i = self.len.checked_sub(1)?;
        self.len = i;
        self.stack[i as usize].take()
    }
}
