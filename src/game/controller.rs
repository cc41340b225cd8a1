//! Game loop controller
//!
//! Drives a game from the initial map to a finished state. Each iteration
//! checks the win condition, shows the map, asks for an attacker and a
//! defender, validates the pair and resolves one battle round.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::combat::dice::{clock_seed, Dice, DiceSource};
use crate::combat::resolution::resolve_battle;
use crate::core::config::GameConfig;
use crate::core::error::{ConquestError, Result};
use crate::core::types::Turn;
use crate::game::history::{BattleEvent, BattleLog};
use crate::game::output::GameSummary;
use crate::game::state::{FinishReason, GameState};
use crate::map::TerritoryRegistry;
use crate::ui::{MapView, SelectionInput, SelectionRole};

/// Selection value that leaves the game
pub const EXIT_SENTINEL: i64 = 0;

pub struct GameController<D: DiceSource = Dice> {
    registry: TerritoryRegistry,
    dice: D,
    state: GameState,
    history: BattleLog,
    turn: Turn,
    max_turns: Option<Turn>,
    refused_attacks: u32,
    troops_at_start: u64,
    seed: Option<u64>,
}

impl GameController<Dice> {
    /// Set up a new game from configuration
    ///
    /// The RNG is seeded once: it draws the starting troops and then becomes
    /// the dice for the rest of the game.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(clock_seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let registry = TerritoryRegistry::initialize(config, &mut rng)?;

        tracing::info!(
            seed,
            territories = registry.len(),
            "New game initialized"
        );

        let mut game = Self::new(registry, Dice::from_rng(rng, seed), config.max_turns);
        game.seed = Some(game.dice.seed());
        Ok(game)
    }
}

impl<D: DiceSource> GameController<D> {
    pub fn new(registry: TerritoryRegistry, dice: D, max_turns: Option<Turn>) -> Self {
        let troops_at_start = registry.total_troops();
        Self {
            registry,
            dice,
            state: GameState::Playing,
            history: BattleLog::new(),
            turn: 0,
            max_turns,
            refused_attacks: 0,
            troops_at_start,
            seed: None,
        }
    }

    pub fn registry(&self) -> &TerritoryRegistry {
        &self.registry
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn history(&self) -> &BattleLog {
        &self.history
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Seed of the dice stream, if the game was built from configuration
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Finish reason if the game should stop now
    fn finish_condition(&self) -> Option<FinishReason> {
        if let Some(winner) = self.registry.sole_owner() {
            return Some(FinishReason::Conquered { winner });
        }
        match self.max_turns {
            Some(limit) if self.turn >= limit => Some(FinishReason::TurnLimit),
            _ => None,
        }
    }

    fn finish(&mut self, reason: FinishReason, view: &mut dyn MapView) -> Result<GameState> {
        tracing::info!(?reason, turn = self.turn, "Game finished");
        self.state = GameState::Finished(reason);
        view.show_finish(reason)?;
        Ok(self.state)
    }

    /// Validate a selection and resolve one battle round
    ///
    /// Recoverable errors leave the map untouched.
    pub fn attack(&mut self, attacker_raw: i64, defender_raw: i64) -> Result<BattleEvent> {
        let attacker_id = self.registry.checked_id(attacker_raw)?;
        let defender_id = self.registry.checked_id(defender_raw)?;
        let (attacker, defender) = self.registry.pair_mut(attacker_id, defender_id)?;

        if attacker.owner == defender.owner {
            return Err(ConquestError::SelfAttack {
                attacker: attacker_id,
                defender: defender_id,
            });
        }

        let attacking_player = attacker.owner;
        let outcome = resolve_battle(attacker, defender, &mut self.dice);
        let report = match outcome.into_result(attacker) {
            Ok(report) => report,
            Err(e) => {
                self.refused_attacks += 1;
                return Err(e);
            }
        };

        self.turn += 1;
        tracing::info!(
            turn = self.turn,
            attacker = %attacker_id,
            defender = %defender_id,
            attacker_roll = report.attacker_roll,
            defender_roll = report.defender_roll,
            conquered = report.conquered,
            "Battle resolved"
        );

        self.history.record(
            self.turn,
            attacker_id,
            defender_id,
            attacking_player,
            report.clone(),
        );
        Ok(BattleEvent {
            turn: self.turn,
            attacker: attacker_id,
            defender: defender_id,
            attacking_player,
            report,
        })
    }

    /// Run one loop iteration
    pub fn step(
        &mut self,
        view: &mut dyn MapView,
        input: &mut dyn SelectionInput,
    ) -> Result<GameState> {
        if self.state.is_finished() {
            return Ok(self.state);
        }
        if let Some(reason) = self.finish_condition() {
            if matches!(reason, FinishReason::Conquered { .. }) {
                view.show_map(self.registry.territories())?;
            }
            return self.finish(reason, view);
        }

        view.show_map(self.registry.territories())?;

        let max = self.registry.len();
        let Some(attacker) = input
            .read_selection(SelectionRole::Attacker, max)?
            .filter(|&id| id != EXIT_SENTINEL)
        else {
            return self.finish(FinishReason::UserExit, view);
        };
        let Some(defender) = input
            .read_selection(SelectionRole::Defender, max)?
            .filter(|&id| id != EXIT_SENTINEL)
        else {
            return self.finish(FinishReason::UserExit, view);
        };

        match self.attack(attacker, defender) {
            Ok(event) => {
                let attacker = self.registry.lookup(event.attacker)?;
                let defender = self.registry.lookup(event.defender)?;
                view.show_battle(attacker, defender, &event.report)?;
            }
            Err(e) if e.is_recoverable() => {
                tracing::debug!(error = %e, "Selection rejected");
                view.show_rejection(&e)?;
            }
            Err(e) => return Err(e),
        }

        Ok(self.state)
    }

    /// Play until the game finishes, consuming the map into a summary
    pub fn run(
        mut self,
        view: &mut dyn MapView,
        input: &mut dyn SelectionInput,
    ) -> Result<GameSummary> {
        while !self.state.is_finished() {
            self.step(view, input)?;
        }
        Ok(self.into_summary())
    }

    /// Summarize the game, releasing the map
    ///
    /// Games that never finished report `UserExit`.
    pub fn into_summary(self) -> GameSummary {
        let reason = match self.state {
            GameState::Finished(reason) => reason,
            GameState::Playing => FinishReason::UserExit,
        };
        let summary = GameSummary::new(
            reason,
            self.registry.into_territories(),
            self.history,
            self.turn,
            self.refused_attacks,
            self.troops_at_start,
        );
        GameSummary {
            seed: self.seed,
            ..summary
        }
    }
}
