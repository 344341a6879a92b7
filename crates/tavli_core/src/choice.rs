//! Outcome of the playable-dice search.

use tracing::debug;

use crate::dice::DiceSet;
use crate::error::EngineError;

/// Which dice the player may use this turn.
///
/// Statuses inside each option are play marks: Available dice can be
/// played, Blocked ones cannot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiceChoice {
    /// No die moves any checker; every real die was marked Blocked.
    NoMove,
    Single(DiceSet),
    /// Dice order decides which die is playable; the player picks one.
    Either(DiceSet, DiceSet),
}

impl DiceChoice {
    pub fn options(&self) -> Vec<&DiceSet> {
        match self {
            DiceChoice::NoMove => Vec::new(),
            DiceChoice::Single(dice) => vec![dice],
            DiceChoice::Either(first, second) => vec![first, second],
        }
    }

    pub fn is_single(&self) -> bool {
        matches!(self, DiceChoice::Single(_))
    }

    pub fn is_no_move(&self) -> bool {
        matches!(self, DiceChoice::NoMove)
    }
}

impl std::fmt::Display for DiceChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiceChoice::NoMove => write!(f, "no move"),
            DiceChoice::Single(dice) => write!(f, "{dice}"),
            DiceChoice::Either(first, second) => write!(f, "{first} | {second}"),
        }
    }
}

/// Collects search passes while they run. Dice still carry search marks
/// (Used = proven playable) until [`DiceOptions::convert_to_play`].
#[derive(Clone, Debug, Default)]
pub struct DiceOptions {
    first: Option<DiceSet>,
    second: Option<DiceSet>,
    converted: bool,
}

impl DiceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first(&self) -> Option<&DiceSet> {
        self.first.as_ref()
    }

    pub fn second(&self) -> Option<&DiceSet> {
        self.second.as_ref()
    }

    pub fn is_single(&self) -> bool {
        self.first.is_some() && self.second.is_none()
    }

    /// Store the result of one search pass. Returns whether it was kept.
    ///
    /// Passes that used nothing are dropped, a pass that used every die
    /// replaces whatever was stored, and duplicates of the first option
    /// are ignored.
    pub fn add_option(&mut self, option: DiceSet) -> Result<bool, EngineError> {
        if option.used_count() == 0 {
            debug!(dice = %option, "no dice used, option dropped");
            return Ok(false);
        }
        if self.first.as_ref().is_some_and(DiceSet::all_used) {
            debug!(dice = %option, "fully usable option already stored");
            return Ok(false);
        }
        if option.all_used() {
            debug!(dice = %option, "all dice used, single option");
            self.first = Some(option);
            self.second = None;
            return Ok(true);
        }
        if self.first.as_ref().is_some_and(|first| first.same_outcome(&option)) {
            debug!(dice = %option, "option already stored");
            return Ok(false);
        }
        if self.first.is_none() {
            self.first = Some(option);
        } else if self.second.is_none() {
            self.second = Some(option);
        } else {
            return Err(EngineError::Defect(format!(
                "cannot store a third dice option {option}"
            )));
        }
        Ok(true)
    }

    /// One-time switch from search marks to play marks. Returns false if
    /// already done.
    pub fn convert_to_play(&mut self) -> Result<bool, EngineError> {
        if self.converted {
            return Ok(false);
        }
        for dice in self.first.iter_mut().chain(self.second.iter_mut()) {
            dice.convert_to_play()?;
        }
        self.converted = true;
        Ok(true)
    }

    pub fn into_choice(self) -> DiceChoice {
        match (self.first, self.second) {
            (Some(first), Some(second)) => DiceChoice::Either(first, second),
            (Some(first), None) => DiceChoice::Single(first),
            (None, _) => DiceChoice::NoMove,
        }
    }
}

#[cfg(test)]
#[path = "choice_tests.rs"]
mod choice_tests;
