//! Territory - a unit of ownable game state

use serde::{Deserialize, Serialize};

use crate::combat::constants::MIN_ATTACKING_TROOPS;
use crate::core::types::{Player, TerritoryId};

/// A single territory on the map
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub id: TerritoryId,
    /// Derived from id and owner; regenerated whenever the owner changes
    pub name: String,
    pub troops: u32,
    pub owner: Player,
}

impl Territory {
    pub fn new(id: TerritoryId, owner: Player, troops: u32) -> Self {
        Self {
            id,
            name: display_name(id, owner),
            troops,
            owner,
        }
    }

    /// Hand this territory to a new owner, leaving `troops` behind
    pub fn transfer_to(&mut self, owner: Player, troops: u32) {
        self.owner = owner;
        self.troops = troops;
        self.name = display_name(self.id, owner);
    }

    pub fn can_attack(&self) -> bool {
        self.troops >= MIN_ATTACKING_TROOPS
    }
}

/// Display name for a territory, e.g. `T3-P1`
pub fn display_name(id: TerritoryId, owner: Player) -> String {
    format!("T{}-P{}", id, owner.number())
}
