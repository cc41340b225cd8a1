//! Turn-by-turn play: the game loop, its state machine and its record

pub mod controller;
pub mod history;
pub mod output;
pub mod state;

pub use controller::{GameController, EXIT_SENTINEL};
pub use history::{BattleEvent, BattleLog};
pub use output::{GameStats, GameSummary};
pub use state::{FinishReason, GameState};
