//! End-of-game summary and serialization

use serde::Serialize;

use crate::core::error::Result;
use crate::core::types::{Player, Turn};
use crate::game::history::BattleLog;
use crate::game::state::FinishReason;
use crate::map::Territory;

/// Complete record of a finished game
#[derive(Clone, Debug, Serialize)]
pub struct GameSummary {
    pub reason: FinishReason,
    /// Seed of the dice stream, when the game was set up from one
    pub seed: Option<u64>,
    pub final_map: Vec<Territory>,
    pub history: BattleLog,
    pub statistics: GameStats,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameStats {
    pub turns_played: Turn,
    pub battles: u32,
    pub conquests: u32,
    pub refused_attacks: u32,
    pub troops_at_start: u64,
    pub troops_at_end: u64,
    pub player_one_territories: u32,
    pub player_two_territories: u32,
}

impl GameSummary {
    pub fn new(
        reason: FinishReason,
        final_map: Vec<Territory>,
        history: BattleLog,
        turns_played: Turn,
        refused_attacks: u32,
        troops_at_start: u64,
    ) -> Self {
        let count_for = |player: Player| {
            final_map.iter().filter(|t| t.owner == player).count() as u32
        };
        let statistics = GameStats {
            turns_played,
            battles: history.len() as u32,
            conquests: history.conquests().count() as u32,
            refused_attacks,
            troops_at_start,
            troops_at_end: final_map.iter().map(|t| u64::from(t.troops)).sum(),
            player_one_territories: count_for(Player::One),
            player_two_territories: count_for(Player::Two),
        };

        Self {
            reason,
            seed: None,
            final_map,
            history,
            statistics,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self.reason {
            FinishReason::Conquered { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        let ending = match self.reason {
            FinishReason::Conquered { winner } => format!("{} conquered every territory", winner),
            FinishReason::UserExit => "Game left before a winner emerged".to_string(),
            FinishReason::TurnLimit => "Turn limit reached".to_string(),
        };
        let mut text = format!(
            "{} after {} turns\n\
             {} battles, {} conquests, {} refused attacks\n\
             Troops: {} at start, {} remain\n\
             Territories: Player 1 holds {}, Player 2 holds {}",
            ending,
            self.statistics.turns_played,
            self.statistics.battles,
            self.statistics.conquests,
            self.statistics.refused_attacks,
            self.statistics.troops_at_start,
            self.statistics.troops_at_end,
            self.statistics.player_one_territories,
            self.statistics.player_two_territories,
        );
        if let Some(seed) = self.seed {
            text.push_str(&format!("\nSeed: {}", seed));
        }
        text
    }
}
