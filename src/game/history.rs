//! Battle history for the current game

use serde::Serialize;

use crate::combat::resolution::BattleReport;
use crate::core::types::{Player, TerritoryId, Turn};

/// One resolved battle round
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BattleEvent {
    pub turn: Turn,
    pub attacker: TerritoryId,
    pub defender: TerritoryId,
    pub attacking_player: Player,
    pub report: BattleReport,
}

/// Every battle resolved so far, in order
#[derive(Clone, Debug, Default, Serialize)]
pub struct BattleLog {
    pub events: Vec<BattleEvent>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        turn: Turn,
        attacker: TerritoryId,
        defender: TerritoryId,
        attacking_player: Player,
        report: BattleReport,
    ) {
        self.events.push(BattleEvent {
            turn,
            attacker,
            defender,
            attacking_player,
            report,
        });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn conquests(&self) -> impl Iterator<Item = &BattleEvent> {
        self.events.iter().filter(|e| e.report.conquered)
    }
}
