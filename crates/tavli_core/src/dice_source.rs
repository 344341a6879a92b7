//! Where die values come from.
//!
//! The engine only needs `roll() -> 1..=6`. [`RandomDice`] is the real
//! source, optionally seeded and with a queue of preset values for
//! replaying a recorded game. [`ScriptedDice`] cycles over a fixed list.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

pub trait DiceSource {
    /// One die value in 1..=6.
    fn roll(&mut self) -> u8;
}

pub struct RandomDice {
    rng: StdRng,
    seed: u64,
    preloaded: VecDeque<u8>,
}

impl RandomDice {
    /// Source seeded from system entropy. The seed is logged and can be
    /// read back with [`RandomDice::seed`] to replay the game.
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    pub fn seeded(seed: u64) -> Self {
        info!(seed, "dice source seeded");
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            preloaded: VecDeque::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the random sequence from `seed`. Preloaded values are kept.
    pub fn reseed(&mut self, seed: u64) {
        info!(seed, "dice source reseeded");
        self.rng = StdRng::seed_from_u64(seed);
        self.seed = seed;
    }

    /// Queue values to be rolled before any random ones. Values outside
    /// 1..=6 are skipped; returns how many were skipped.
    pub fn load(&mut self, values: &[u8]) -> usize {
        let mut rejected = 0;
        for &value in values {
            if (1..=6).contains(&value) {
                self.preloaded.push_back(value);
            } else {
                warn!(value, "ignoring preloaded die value");
                rejected += 1;
            }
        }
        rejected
    }

    /// Queue every digit 1..=6 found in `text`, e.g. a recorded "31 66 52".
    /// Returns how many values were queued.
    pub fn load_str(&mut self, text: &str) -> usize {
        let before = self.preloaded.len();
        self.preloaded.extend(
            text.chars()
                .filter_map(|c| c.to_digit(10))
                .filter(|d| (1..=6).contains(d))
                .map(|d| d as u8),
        );
        self.preloaded.len() - before
    }

    pub fn preloaded(&self) -> usize {
        self.preloaded.len()
    }
}

impl Default for RandomDice {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceSource for RandomDice {
    fn roll(&mut self) -> u8 {
        match self.preloaded.pop_front() {
            Some(value) => value,
            None => self.rng.gen_range(1..=6),
        }
    }
}

/// Deterministic source cycling over a fixed list of values.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    values: Vec<u8>,
    next: usize,
}

impl ScriptedDice {
    pub fn new(values: Vec<u8>) -> Self {
        assert!(!values.is_empty(), "scripted dice need at least one value");
        assert!(
            values.iter().all(|v| (1..=6).contains(v)),
            "scripted dice values must be in 1..=6"
        );
        Self { values, next: 0 }
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

#[cfg(test)]
#[path = "dice_source_tests.rs"]
mod dice_source_tests;
