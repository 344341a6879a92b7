use serde::{Deserialize, Serialize};

use crate::dice_source::DiceSource;
use crate::error::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DieStatus {
    /// Can still be played.
    Available,
    /// Consumed by a move (or, during a search pass, proven playable).
    Used,
    /// Proven unplayable for this turn.
    Blocked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    value: u8,
    status: DieStatus,
}

impl Die {
    /// # Panics
    ///
    /// Panics if `value` is outside 1..=6. Values from a [`DiceSource`]
    /// go through [`DiceSet::roll`], which rejects them instead.
    pub fn new(value: u8) -> Self {
        assert!((1..=6).contains(&value), "die value {value} outside 1..=6");
        Self {
            value,
            status: DieStatus::Available,
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn status(&self) -> DieStatus {
        self.status
    }

    pub fn is_available(&self) -> bool {
        self.status == DieStatus::Available
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            DieStatus::Used => write!(f, "({})", self.value),
            DieStatus::Blocked => write!(f, "/{}/", self.value),
            DieStatus::Available => write!(f, "{}", self.value),
        }
    }
}

/// The dice of one roll: two dice, or four when both show the same value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceSet {
    dice: Vec<Die>,
}

impl DiceSet {
    /// # Panics
    ///
    /// Panics if a value is outside 1..=6.
    pub fn from_values(first: u8, second: u8) -> Self {
        let mut dice = Vec::with_capacity(4);
        dice.push(Die::new(first));
        dice.push(Die::new(second));
        if first == second {
            dice.push(Die::new(first));
            dice.push(Die::new(first));
        }
        Self { dice }
    }

    /// Roll two dice from `source`. Out-of-range values are reported, not
    /// turned into dice.
    pub fn roll(source: &mut dyn DiceSource) -> Result<Self, EngineError> {
        let first = checked_value(source.roll())?;
        let second = checked_value(source.roll())?;
        Ok(Self::from_values(first, second))
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    pub fn is_double(&self) -> bool {
        self.dice.len() >= 2 && self.dice[0].value == self.dice[1].value
    }

    pub fn get(&self, index: usize) -> Option<Die> {
        self.dice.get(index).copied()
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn iter(&self) -> impl Iterator<Item = &Die> {
        self.dice.iter()
    }

    /// Index of the first Available die showing `value`.
    pub fn unused(&self, value: u8) -> Option<usize> {
        self.dice
            .iter()
            .position(|d| d.value == value && d.is_available())
    }

    /// True when no die is Available any more.
    pub fn all_used(&self) -> bool {
        !self.dice.iter().any(Die::is_available)
    }

    /// Dice that are no longer Available, Blocked ones included.
    pub fn used_count(&self) -> usize {
        self.dice.iter().filter(|d| !d.is_available()).count()
    }

    /// Dice actually consumed by a move.
    pub fn played_count(&self) -> usize {
        self.dice
            .iter()
            .filter(|d| d.status == DieStatus::Used)
            .count()
    }

    /// Indices of Available dice in roll order, or reversed.
    pub fn available_indices(&self, reversed: bool) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.dice.len())
            .filter(|&i| self.dice[i].is_available())
            .collect();
        if reversed {
            indices.reverse();
        }
        indices
    }

    pub(crate) fn set_status(&mut self, index: usize, status: DieStatus) {
        self.dice[index].status = status;
    }

    pub(crate) fn block_all(&mut self) {
        for die in &mut self.dice {
            die.status = DieStatus::Blocked;
        }
    }

    /// Turn search marks into play marks: dice proven playable become
    /// Available, the rest Blocked.
    pub(crate) fn convert_to_play(&mut self) -> Result<(), EngineError> {
        if self.dice.iter().any(|d| d.status == DieStatus::Blocked) {
            return Err(EngineError::Defect(format!(
                "blocked die in search result {self}"
            )));
        }
        for die in &mut self.dice {
            die.status = match die.status {
                DieStatus::Used => DieStatus::Available,
                _ => DieStatus::Blocked,
            };
        }
        Ok(())
    }

    /// Same dice and statuses, ignoring order.
    pub(crate) fn same_outcome(&self, other: &DiceSet) -> bool {
        let mut mine: Vec<(u8, DieStatus)> = self.dice.iter().map(|d| (d.value, d.status)).collect();
        let mut theirs: Vec<(u8, DieStatus)> =
            other.dice.iter().map(|d| (d.value, d.status)).collect();
        mine.sort();
        theirs.sort();
        mine == theirs
    }

    /// Copy this set's statuses onto `master`, which must hold the same
    /// dice in the same order.
    pub fn inherit_status(&self, master: &mut DiceSet) -> Result<(), EngineError> {
        if self.dice.len() != master.dice.len() {
            return Err(EngineError::InvalidOperation(format!(
                "dice count mismatch: {} vs {}",
                self.dice.len(),
                master.dice.len()
            )));
        }
        if self
            .dice
            .iter()
            .zip(&master.dice)
            .any(|(a, b)| a.value != b.value)
        {
            return Err(EngineError::InvalidOperation(format!(
                "dice values mismatch: {self} vs {master}"
            )));
        }
        for (die, target) in self.dice.iter().zip(master.dice.iter_mut()) {
            target.status = die.status;
        }
        Ok(())
    }
}

pub(crate) fn checked_value(value: u8) -> Result<u8, EngineError> {
    if (1..=6).contains(&value) {
        Ok(value)
    } else {
        Err(EngineError::InvalidDieValue(value))
    }
}

impl std::fmt::Display for DiceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, die) in self.dice.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{die}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "dice_tests.rs"]
mod dice_tests;
