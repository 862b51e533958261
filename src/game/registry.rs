//! Player registry.
//!
//! Owns the players in turn order. Ids are handed out monotonically at
//! registration and never reused; the order of `all()` is the turn order
//! and never changes after registration.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Player, PlayerId};

/// Registered players, in turn order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRegistry {
    players: Vec<Player>,
    next_id: u32,
}

impl PlayerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new player on the home field, appended to the turn
    /// order. Returns the fresh id.
    pub fn register(&mut self, name: impl Into<String>) -> PlayerId {
        let id = PlayerId::new(self.next_id);
        self.next_id += 1;
        self.players.push(Player::new(id, name));
        id
    }

    /// Look a player up by id.
    ///
    /// # Errors
    ///
    /// [`GameError::UnknownPlayer`] when the id was never registered.
    pub fn by_id(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.players
            .iter()
            .find(|p| p.id == id)
            .ok_or(GameError::UnknownPlayer(id))
    }

    /// All players, in turn order.
    #[must_use]
    pub fn all(&self) -> &[Player] {
        &self.players
    }

    pub(crate) fn all_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    /// Number of registered players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether nobody has registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
