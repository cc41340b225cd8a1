//! TerritoryRegistry - owns every territory for the lifetime of a game

use rand::Rng;

use crate::core::config::GameConfig;
use crate::core::error::{ConquestError, Result};
use crate::core::types::{Player, TerritoryId};
use crate::map::territory::{display_name, Territory};

/// Fixed-size store of territories addressed by 1-based id
#[derive(Clone, Debug)]
pub struct TerritoryRegistry {
    territories: Vec<Territory>,
}

impl TerritoryRegistry {
    /// Create `config.territory_count` territories with random starting troops
    ///
    /// The first three fifths (rounded up) belong to Player 1 and the rest to
    /// Player 2, with at least one territory on each side.
    pub fn initialize<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let count = config.territory_count;
        let territories = (0..count)
            .map(|index| {
                let troops = rng.gen_range(config.min_starting_troops..=config.max_starting_troops);
                Territory::new(TerritoryId::from_index(index), initial_owner(index, count), troops)
            })
            .collect();

        Ok(Self { territories })
    }

    /// Build a registry from explicit records
    ///
    /// Ids are reassigned densely from 1 in the given order. Every territory
    /// needs at least one troop and both players must hold territory.
    pub fn from_territories(mut territories: Vec<Territory>) -> Result<Self> {
        if territories.len() < 2 {
            return Err(ConquestError::InvalidConfig(format!(
                "a map needs at least 2 territories, got {}",
                territories.len()
            )));
        }
        if let Some(index) = territories.iter().position(|t| t.troops == 0) {
            return Err(ConquestError::InvalidConfig(format!(
                "territory {} starts without troops",
                index + 1
            )));
        }
        for player in [Player::One, Player::Two] {
            if territories.iter().all(|t| t.owner != player) {
                return Err(ConquestError::InvalidConfig(format!(
                    "{} holds no territory",
                    player
                )));
            }
        }
        for (index, territory) in territories.iter_mut().enumerate() {
            let id = TerritoryId::from_index(index);
            if territory.id != id {
                let owner = territory.owner;
                territory.id = id;
                territory.name = display_name(id, owner);
            }
        }
        Ok(Self { territories })
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    pub fn into_territories(self) -> Vec<Territory> {
        self.territories
    }

    /// Resolve a raw selection into a valid id
    pub fn checked_id(&self, raw: i64) -> Result<TerritoryId> {
        if raw < 1 || raw > self.territories.len() as i64 {
            return Err(ConquestError::InvalidId {
                id: raw,
                max: self.territories.len(),
            });
        }
        Ok(TerritoryId(raw as u32))
    }

    pub fn lookup(&self, id: TerritoryId) -> Result<&Territory> {
        self.territories
            .get(id.index())
            .filter(|_| id.0 >= 1)
            .ok_or(ConquestError::InvalidId {
                id: i64::from(id.0),
                max: self.territories.len(),
            })
    }

    /// Borrow two distinct territories mutably at once
    pub fn pair_mut(
        &mut self,
        first: TerritoryId,
        second: TerritoryId,
    ) -> Result<(&mut Territory, &mut Territory)> {
        self.lookup(first)?;
        self.lookup(second)?;
        if first == second {
            return Err(ConquestError::SelfAttack {
                attacker: first,
                defender: second,
            });
        }

        let (a, b) = (first.index(), second.index());
        if a < b {
            let (left, right) = self.territories.split_at_mut(b);
            Ok((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.territories.split_at_mut(a);
            Ok((&mut right[0], &mut left[b]))
        }
    }

    /// The single player owning every territory, if there is one
    pub fn sole_owner(&self) -> Option<Player> {
        let first = self.territories.first()?.owner;
        self.territories
            .iter()
            .all(|t| t.owner == first)
            .then_some(first)
    }

    pub fn territories_of(&self, player: Player) -> impl Iterator<Item = &Territory> {
        self.territories.iter().filter(move |t| t.owner == player)
    }

    pub fn total_troops(&self) -> u64 {
        self.territories.iter().map(|t| u64::from(t.troops)).sum()
    }
}

/// Owner of the territory at `index` in a map of `count` territories
pub fn initial_owner(index: usize, count: usize) -> Player {
    let player_one = (count * 3).div_ceil(5).clamp(1, count.saturating_sub(1).max(1));
    if index < player_one {
        Player::One
    } else {
        Player::Two
    }
}
