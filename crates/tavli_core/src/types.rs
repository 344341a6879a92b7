use serde::{Deserialize, Serialize};

/// Number of checkers each player owns for the whole game.
pub const CHECKERS_PER_PLAYER: usize = 15;
/// Absolute slots on a board: 24 track points, two bars, two outs.
pub const ABSOLUTE_SLOTS: usize = 28;
/// Relative slot of a player's bar (hit checkers waiting to re-enter).
pub const BAR: usize = 0;
/// Relative slot of a player's out tray (borne off checkers).
pub const OUT: usize = 25;
/// First relative slot of the home quadrant.
pub const HOME_START: usize = 19;
/// Last relative track slot.
pub const LAST_POINT: usize = 24;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn default_color(self) -> CheckerColor {
        match self {
            Player::One => CheckerColor::White,
            Player::Two => CheckerColor::Black,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckerColor {
    White,
    Black,
}

/// Colour of a board point. Points alternate by absolute index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointColor {
    Light,
    Dark,
}

impl PointColor {
    pub fn for_slot(absolute: usize) -> PointColor {
        if absolute % 2 == 0 {
            PointColor::Light
        } else {
            PointColor::Dark
        }
    }
}

/// A checker never changes owner or colour; it only travels between positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Checker {
    pub owner: Player,
    pub color: CheckerColor,
}

impl Checker {
    pub fn new(owner: Player, color: CheckerColor) -> Self {
        Self { owner, color }
    }

    /// Checker in the owner's default colour.
    pub fn of(owner: Player) -> Self {
        Self::new(owner, owner.default_color())
    }

    pub fn is_owned_by(&self, player: Player) -> bool {
        self.owner == player
    }
}
