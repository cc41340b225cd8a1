//! Game configuration with documented constants
//!
//! Values come from `GameConfig::default()`, optionally overlaid by a TOML
//! file, and finally by command-line flags in the binary.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::{ConquestError, Result};

/// Configuration for one game
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of territories on the map
    ///
    /// Fixed for the whole game. Must be at least 2 so that each player
    /// can start with a territory.
    pub territory_count: usize,

    /// Lowest starting troop count for a territory (inclusive)
    pub min_starting_troops: u32,

    /// Highest starting troop count for a territory (inclusive)
    pub max_starting_troops: u32,

    /// Seed for the dice stream
    ///
    /// `None` seeds from the wall clock so repeated runs differ.
    pub seed: Option<u64>,

    /// Stop after this many resolved battles
    ///
    /// `None` plays until a player owns every territory or the user exits.
    pub max_turns: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            territory_count: 5,
            min_starting_troops: 1,
            max_starting_troops: 3,
            seed: None,
            max_turns: None,
        }
    }
}

impl GameConfig {
    /// Parse a config from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.territory_count < 2 {
            return Err(ConquestError::InvalidConfig(format!(
                "territory_count must be at least 2, got {}",
                self.territory_count
            )));
        }
        if u32::try_from(self.territory_count).is_err() {
            return Err(ConquestError::InvalidConfig(format!(
                "territory_count {} is too large",
                self.territory_count
            )));
        }
        if self.min_starting_troops < 1 {
            return Err(ConquestError::InvalidConfig(
                "min_starting_troops must be at least 1".to_string(),
            ));
        }
        if self.min_starting_troops > self.max_starting_troops {
            return Err(ConquestError::InvalidConfig(format!(
                "min_starting_troops ({}) exceeds max_starting_troops ({})",
                self.min_starting_troops, self.max_starting_troops
            )));
        }
        Ok(())
    }
}
