//! Battle resolution
//!
//! One round per call: attacker rolls first, then defender. The higher die
//! wins the round and ties favour the defender. The attacker pays one troop
//! for every round. A defender reduced to zero troops is conquered: it
//! changes hands and the attacker moves one troop in to hold it.

use serde::Serialize;

use crate::combat::constants::{ATTACK_COST, CONQUEST_GARRISON};
use crate::combat::dice::DiceSource;
use crate::core::error::ConquestError;
use crate::map::Territory;

/// Who took the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundWinner {
    Attacker,
    Defender,
    /// Equal dice; resolved in the defender's favour
    Tie,
}

/// What happened in a resolved round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BattleReport {
    pub attacker_roll: u8,
    pub defender_roll: u8,
    pub winner: RoundWinner,
    pub attacker_troops: u32,
    pub defender_troops: u32,
    pub conquered: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleOutcome {
    /// Attacker had too few troops; nothing changed
    InsufficientTroops { troops: u32 },
    Resolved(BattleReport),
}

impl BattleOutcome {
    pub fn report(&self) -> Option<&BattleReport> {
        match self {
            BattleOutcome::Resolved(report) => Some(report),
            BattleOutcome::InsufficientTroops { .. } => None,
        }
    }

    /// Convert a refused attack into the error shown to the player
    pub fn into_result(self, attacker: &Territory) -> Result<BattleReport, ConquestError> {
        match self {
            BattleOutcome::Resolved(report) => Ok(report),
            BattleOutcome::InsufficientTroops { troops } => Err(ConquestError::InsufficientTroops {
                name: attacker.name.clone(),
                troops,
            }),
        }
    }
}

/// Resolve one round of combat between `attacker` and `defender`
///
/// The caller guarantees the two territories are distinct and have
/// different owners.
pub fn resolve_battle<D: DiceSource + ?Sized>(
    attacker: &mut Territory,
    defender: &mut Territory,
    dice: &mut D,
) -> BattleOutcome {
    debug_assert_ne!(attacker.id, defender.id);
    debug_assert_ne!(attacker.owner, defender.owner);

    if !attacker.can_attack() {
        tracing::debug!(
            attacker = %attacker.name,
            troops = attacker.troops,
            "Attack refused: insufficient troops"
        );
        return BattleOutcome::InsufficientTroops {
            troops: attacker.troops,
        };
    }

    let attacker_roll = dice.roll();
    let defender_roll = dice.roll();

    let winner = match attacker_roll.cmp(&defender_roll) {
        std::cmp::Ordering::Greater => RoundWinner::Attacker,
        std::cmp::Ordering::Less => RoundWinner::Defender,
        std::cmp::Ordering::Equal => RoundWinner::Tie,
    };

    if winner == RoundWinner::Attacker {
        defender.troops = defender.troops.saturating_sub(1);
    }
    attacker.troops = attacker.troops.saturating_sub(ATTACK_COST);

    let conquered = defender.troops == 0;
    if conquered {
        defender.transfer_to(attacker.owner, CONQUEST_GARRISON);
        attacker.troops = attacker.troops.saturating_sub(CONQUEST_GARRISON);
        tracing::info!(
            territory = %defender.name,
            new_owner = %attacker.owner,
            "Territory conquered"
        );
    }

    tracing::debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        attacker_roll,
        defender_roll,
        ?winner,
        "Battle round resolved"
    );

    BattleOutcome::Resolved(BattleReport {
        attacker_roll,
        defender_roll,
        winner,
        attacker_troops: attacker.troops,
        defender_troops: defender.troops,
        conquered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::dice::ScriptedDice;
    use crate::core::types::{Player, TerritoryId};

    fn pair(attacker_troops: u32, defender_troops: u32) -> (Territory, Territory) {
        (
            Territory::new(TerritoryId(1), Player::One, attacker_troops),
            Territory::new(TerritoryId(4), Player::Two, defender_troops),
        )
    }

    #[test]
    fn test_attacker_win_costs_both_sides_one() {
        let (mut attacker, mut defender) = pair(3, 3);
        let mut dice = ScriptedDice::new([5, 3]);

        let outcome = resolve_battle(&mut attacker, &mut defender, &mut dice);
        let report = outcome.report().unwrap();

        assert_eq!(report.winner, RoundWinner::Attacker);
        assert_eq!((report.attacker_roll, report.defender_roll), (5, 3));
        assert_eq!(attacker.troops, 2);
        assert_eq!(defender.troops, 2);
        assert!(!report.conquered);
        assert_eq!(defender.owner, Player::Two);
    }

    #[test]
    fn test_defender_win_costs_attacker_one() {
        let (mut attacker, mut defender) = pair(3, 2);
        let mut dice = ScriptedDice::new([2, 5]);

        let outcome = resolve_battle(&mut attacker, &mut defender, &mut dice);

        assert_eq!(outcome.report().unwrap().winner, RoundWinner::Defender);
        assert_eq!(attacker.troops, 2);
        assert_eq!(defender.troops, 2);
    }

    #[test]
    fn test_tie_favours_defender() {
        let (mut attacker, mut defender) = pair(3, 1);
        let mut dice = ScriptedDice::new([4, 4]);

        let outcome = resolve_battle(&mut attacker, &mut defender, &mut dice);
        let report = outcome.report().unwrap();

        assert_eq!(report.winner, RoundWinner::Tie);
        assert_eq!(attacker.troops, 2);
        assert_eq!(defender.troops, 1);
        assert!(!report.conquered);
    }

    #[test]
    fn test_conquest_transfers_ownership() {
        let (mut attacker, mut defender) = pair(4, 1);
        let mut dice = ScriptedDice::new([6, 2]);

        let outcome = resolve_battle(&mut attacker, &mut defender, &mut dice);
        let report = outcome.report().unwrap();

        assert!(report.conquered);
        assert_eq!(defender.troops, 1);
        assert_eq!(defender.owner, Player::One);
        assert_eq!(defender.name, "T4-P1");
        assert_eq!(attacker.troops, 2);
        assert_eq!(report.attacker_troops, 2);
        assert_eq!(report.defender_troops, 1);
    }

    #[test]
    fn test_conquest_with_two_troops_empties_attacker() {
        let (mut attacker, mut defender) = pair(2, 1);
        let mut dice = ScriptedDice::new([3, 1]);

        resolve_battle(&mut attacker, &mut defender, &mut dice);

        assert_eq!(attacker.troops, 0);
        assert_eq!(defender.troops, 1);
        assert_eq!(defender.owner, Player::One);
        assert!(!attacker.can_attack());
    }

    #[test]
    fn test_single_troop_attacker_is_noop() {
        let (mut attacker, mut defender) = pair(1, 2);
        let before = (attacker.clone(), defender.clone());
        let mut dice = ScriptedDice::new([6, 1]);

        let outcome = resolve_battle(&mut attacker, &mut defender, &mut dice);

        assert_eq!(outcome, BattleOutcome::InsufficientTroops { troops: 1 });
        assert_eq!((attacker, defender), before);
        assert_eq!(dice.rolled(), 0);
    }

    #[test]
    fn test_attacker_rolls_before_defender() {
        let (mut attacker, mut defender) = pair(3, 3);
        let mut dice = ScriptedDice::new([1, 6]);

        let outcome = resolve_battle(&mut attacker, &mut defender, &mut dice);
        let report = outcome.report().unwrap();

        assert_eq!(report.attacker_roll, 1);
        assert_eq!(report.defender_roll, 6);
        assert_eq!(report.winner, RoundWinner::Defender);
    }

    #[test]
    fn test_refusal_maps_to_error() {
        let attacker = Territory::new(TerritoryId(2), Player::One, 1);
        let err = BattleOutcome::InsufficientTroops { troops: 1 }
            .into_result(&attacker)
            .unwrap_err();
        assert!(matches!(err, ConquestError::InsufficientTroops { troops: 1, .. }));
    }
}
