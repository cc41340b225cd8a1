//! Dice sources for combat resolution

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::combat::constants::DIE_FACES;

/// Anything that can roll a six-sided die
pub trait DiceSource {
    /// Roll one die, returning a value in `1..=6`
    fn roll(&mut self) -> u8;
}

/// Production dice backed by a seeded ChaCha8 stream
#[derive(Clone, Debug)]
pub struct Dice {
    rng: ChaCha8Rng,
    seed: u64,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Continue rolling from an RNG that has already been used for setup
    pub fn from_rng(rng: ChaCha8Rng, seed: u64) -> Self {
        Self { rng, seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DiceSource for Dice {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..=DIE_FACES)
    }
}

/// Seed derived from the wall clock, so repeated runs differ
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Dice that replay a fixed sequence, cycling when exhausted
///
/// Values outside `1..=6` are clamped onto the die.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    rolls: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        Self {
            rolls: rolls.into_iter().map(|r| r.clamp(1, DIE_FACES)).collect(),
            cursor: 0,
        }
    }

    /// Number of dice rolled so far
    pub fn rolled(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        if self.rolls.is_empty() {
            self.cursor += 1;
            return 1;
        }
        let value = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        value
    }
}
