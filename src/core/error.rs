//! Error taxonomy.
//!
//! Only two things can go wrong, and both are caller mistakes:
//! referencing a player that was never registered, or constructing a board
//! that breaks the course rules. Out-of-range move targets are *not*
//! errors — the movement engine defines them as no-ops or clamps.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PlayerId;

/// Errors surfaced by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    /// A lookup referenced a player id that was never registered.
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    /// The board's field table violates a construction rule: gaps in the
    /// index sequence, a teleport pointing out of range or at itself, or a
    /// teleport cycle that never terminates.
    #[error("invalid board configuration: {0}")]
    InvalidBoardConfiguration(String),
}
