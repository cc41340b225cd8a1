use thiserror::Error;

use crate::core::types::TerritoryId;

#[derive(Error, Debug)]
pub enum ConquestError {
    #[error("Invalid territory id {id}: expected 1 to {max}")]
    InvalidId { id: i64, max: usize },

    #[error("Territory {attacker} cannot attack territory {defender}: same territory or owner")]
    SelfAttack {
        attacker: TerritoryId,
        defender: TerritoryId,
    },

    #[error("{name} has too few troops ({troops}); at least 2 are needed to attack")]
    InsufficientTroops { name: String, troops: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConquestError {
    /// Errors the game loop recovers from by asking for a new selection
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ConquestError::InvalidId { .. }
                | ConquestError::SelfAttack { .. }
                | ConquestError::InsufficientTroops { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ConquestError>;
