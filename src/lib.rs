//! Conquest - two-player territory conquest decided by dice

pub mod combat;
pub mod core;
pub mod game;
pub mod map;
pub mod ui;
