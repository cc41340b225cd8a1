//! Combat integration tests
//!
//! Battle rounds driven through the registry with scripted dice, plus
//! property checks over random attack sequences.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use conquest::combat::{resolve_battle, BattleOutcome, Dice, RoundWinner, ScriptedDice};
use conquest::core::config::GameConfig;
use conquest::core::types::{Player, TerritoryId};
use conquest::map::TerritoryRegistry;

fn reference_map() -> TerritoryRegistry {
    let config = GameConfig::default();
    TerritoryRegistry::initialize(&config, &mut ChaCha8Rng::seed_from_u64(2024)).unwrap()
}

/// Attacker wins (5 vs 3): both sides lose one troop
#[test]
fn test_attacker_wins_round() {
    let mut registry = reference_map();
    let (attacker, defender) = registry.pair_mut(TerritoryId(1), TerritoryId(4)).unwrap();
    attacker.troops = 3;
    defender.troops = 2;

    let outcome = resolve_battle(attacker, defender, &mut ScriptedDice::new([5, 3]));

    let report = outcome.report().unwrap();
    assert_eq!(report.winner, RoundWinner::Attacker);
    assert!(!report.conquered);
    assert_eq!(registry.lookup(TerritoryId(1)).unwrap().troops, 2);
    assert_eq!(registry.lookup(TerritoryId(4)).unwrap().troops, 1);
}

/// Defender at one troop loses to 6 vs 2 and changes hands
#[test]
fn test_conquest_through_registry() {
    let mut registry = reference_map();
    let (attacker, defender) = registry.pair_mut(TerritoryId(2), TerritoryId(5)).unwrap();
    attacker.troops = 3;
    defender.troops = 1;

    resolve_battle(attacker, defender, &mut ScriptedDice::new([6, 2]));

    let conquered = registry.lookup(TerritoryId(5)).unwrap();
    assert_eq!(conquered.owner, Player::One);
    assert_eq!(conquered.troops, 1);
    assert_eq!(conquered.name, "T5-P1");
    assert_eq!(registry.lookup(TerritoryId(2)).unwrap().troops, 1);
    assert_eq!(registry.territories_of(Player::One).count(), 4);
}

/// Defender attacking back: Player 2 may attack Player 1 the same way
#[test]
fn test_player_two_can_conquer() {
    let mut registry = reference_map();
    let (attacker, defender) = registry.pair_mut(TerritoryId(4), TerritoryId(1)).unwrap();
    attacker.troops = 3;
    defender.troops = 1;

    resolve_battle(attacker, defender, &mut ScriptedDice::new([4, 3]));

    let conquered = registry.lookup(TerritoryId(1)).unwrap();
    assert_eq!(conquered.owner, Player::Two);
    assert_eq!(conquered.name, "T1-P2");
}

#[test]
fn test_tie_never_conquers() {
    let mut registry = reference_map();
    let (attacker, defender) = registry.pair_mut(TerritoryId(1), TerritoryId(4)).unwrap();
    attacker.troops = 3;
    defender.troops = 1;

    let outcome = resolve_battle(attacker, defender, &mut ScriptedDice::new([4, 4]));

    assert_eq!(outcome.report().unwrap().winner, RoundWinner::Tie);
    let defender = registry.lookup(TerritoryId(4)).unwrap();
    assert_eq!(defender.owner, Player::Two);
    assert_eq!(defender.troops, 1);
}

#[test]
fn test_exhausted_attacker_cannot_attack_again() {
    let mut registry = reference_map();
    let mut dice = ScriptedDice::new([1, 6]);

    let (attacker, defender) = registry.pair_mut(TerritoryId(1), TerritoryId(4)).unwrap();
    attacker.troops = 2;
    let first = resolve_battle(attacker, defender, &mut dice);
    assert!(first.report().is_some());

    let (attacker, defender) = registry.pair_mut(TerritoryId(1), TerritoryId(4)).unwrap();
    let second = resolve_battle(attacker, defender, &mut dice);
    assert_eq!(second, BattleOutcome::InsufficientTroops { troops: 1 });
    assert_eq!(dice.rolled(), 2);
}

proptest! {
    #[test]
    fn prop_initialization_is_well_formed(count in 2usize..60, seed in any::<u64>()) {
        let config = GameConfig { territory_count: count, ..GameConfig::default() };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let registry = TerritoryRegistry::initialize(&config, &mut rng).unwrap();

        prop_assert_eq!(registry.len(), count);
        for (index, territory) in registry.territories().iter().enumerate() {
            prop_assert_eq!(territory.id, TerritoryId(index as u32 + 1));
            prop_assert!(territory.troops >= 1);
        }
        prop_assert!(registry.territories_of(Player::One).count() >= 1);
        prop_assert!(registry.territories_of(Player::Two).count() >= 1);
        prop_assert_eq!(registry.sole_owner(), None);
    }

    #[test]
    fn prop_troops_never_increase(
        seed in any::<u64>(),
        attacks in proptest::collection::vec((1u32..=5, 1u32..=5), 1..80)
    ) {
        let mut registry = reference_map();
        let mut dice = Dice::from_seed(seed);
        let mut total = registry.total_troops();

        for (a, d) in attacks {
            let Ok((attacker, defender)) = registry.pair_mut(TerritoryId(a), TerritoryId(d)) else {
                continue;
            };
            if attacker.owner == defender.owner {
                continue;
            }
            let outcome = resolve_battle(attacker, defender, &mut dice);

            let now = registry.total_troops();
            prop_assert!(now <= total);
            if outcome.report().is_some() {
                prop_assert!(now < total);
            }
            total = now;
            prop_assert_eq!(registry.len(), 5);
        }
    }
}
