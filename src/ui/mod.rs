//! Console collaborators for the game loop
//!
//! The controller only talks to the `MapView` and `SelectionInput` traits;
//! `display` and `input` hold the terminal implementations.

use std::io;

use crate::combat::resolution::BattleReport;
use crate::core::error::ConquestError;
use crate::game::state::FinishReason;
use crate::map::Territory;

pub mod display;
pub mod input;

pub use display::ConsoleView;
pub use input::ConsoleInput;

/// Which territory is being asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRole {
    Attacker,
    Defender,
}

/// Renders game state for the players
pub trait MapView {
    fn show_map(&mut self, territories: &[Territory]) -> io::Result<()>;

    fn show_battle(
        &mut self,
        attacker: &Territory,
        defender: &Territory,
        report: &BattleReport,
    ) -> io::Result<()>;

    fn show_rejection(&mut self, error: &ConquestError) -> io::Result<()>;

    fn show_finish(&mut self, reason: FinishReason) -> io::Result<()>;
}

/// Supplies territory selections
pub trait SelectionInput {
    /// Ask for a territory id in `1..=max`
    ///
    /// `Ok(None)` means the input was absent or not a number.
    fn read_selection(&mut self, role: SelectionRole, max: usize) -> io::Result<Option<i64>>;
}
