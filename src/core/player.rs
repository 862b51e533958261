//! Player identity and per-player state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Ids are assigned by the game at
//! registration time, monotonically increasing, and never reused for the
//! lifetime of a game.
//!
//! ## Player
//!
//! One registered participant: display name, current field index, and the
//! number of turns left to sleep before rolling again.

use serde::{Deserialize, Serialize};

/// Unique identifier for a registered player.
///
/// Assigned in registration order: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

/// One registered participant.
///
/// `position` always names the field whose occupant list contains this
/// player's id; the movement engine keeps the two in lockstep.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identifier, assigned at registration.
    pub id: PlayerId,
    /// Display label.
    pub name: String,
    /// Current field index.
    pub position: usize,
    /// Turns left to skip before this player may roll again.
    pub sleep_remaining: u32,
}

impl Player {
    /// Create a player standing on the home field.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: 0,
            sleep_remaining: 0,
        }
    }

    /// Whether this player skips the current turn.
    #[must_use]
    pub const fn is_sleeping(&self) -> bool {
        self.sleep_remaining > 0
    }
}
