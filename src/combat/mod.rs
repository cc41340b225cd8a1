//! Dice-resolved combat between two territories
//!
//! A single d6-vs-d6 comparison per round. Ties go to the defender.

pub mod constants;
pub mod dice;
pub mod resolution;

pub use dice::{Dice, DiceSource, ScriptedDice};
pub use resolution::{resolve_battle, BattleOutcome, BattleReport, RoundWinner};
