//! Game state machine

use serde::Serialize;

use crate::core::types::Player;

/// Why a game stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FinishReason {
    /// One player owns every territory
    Conquered { winner: Player },
    /// The player entered 0 or something that was not a number
    UserExit,
    /// The configured turn limit was reached
    TurnLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameState {
    Playing,
    Finished(FinishReason),
}

impl GameState {
    pub fn is_finished(&self) -> bool {
        matches!(self, GameState::Finished(_))
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameState::Finished(FinishReason::Conquered { winner }) => Some(*winner),
            _ => None,
        }
    }
}
