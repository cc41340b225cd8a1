//! Combat constants - all tunable values in one place

/// Faces on each die
pub const DIE_FACES: u8 = 6;

/// Troops a territory needs before it may attack
///
/// One troop always stays behind, and every attack costs one.
pub const MIN_ATTACKING_TROOPS: u32 = 2;

/// Troops moved into a conquered territory
pub const CONQUEST_GARRISON: u32 = 1;

/// Troops the attacker loses for each round, win or lose
pub const ATTACK_COST: u32 = 1;
