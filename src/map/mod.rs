//! Territory map
//!
//! The fixed set of territories contested during a game, and the registry
//! that owns them.

pub mod registry;
pub mod territory;

pub use registry::{initial_owner, TerritoryRegistry};
pub use territory::Territory;
