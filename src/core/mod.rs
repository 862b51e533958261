//! Core engine types: player identity, dice capability, error taxonomy.
//!
//! These are the building blocks the board, the movement engine and the
//! scheduler are assembled from. Nothing here knows about course layout or
//! movement rules.

pub mod error;
pub mod player;
pub mod rng;

pub use error::GameError;
pub use player::{Player, PlayerId};
pub use rng::{Dice, GameRng, ScriptedDice};
