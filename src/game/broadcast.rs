//! Broadcast and presentation collaborators.
//!
//! After every turn the scheduler hands the move events and a full player
//! snapshot to a [`Broadcast`] sink. Delivery is fire-and-forget: the sink
//! returns nothing and cannot affect engine state. The original server
//! stubbed its transport the same way; [`NoopBroadcast`] keeps that stub.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::engine::MoveEvent;

/// Token colors handed to the presentation layer, cycled by player id.
const PALETTE: [&str; 6] = [
    "#e6194b", "#3cb44b", "#4363d8", "#f58231", "#911eb4", "#46f0f0",
];

/// Read-only view of one player for rendering and transport.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Stable player id.
    pub id: PlayerId,
    /// Display label.
    pub name: String,
    /// CSS-style token color.
    pub color_hint: String,
    /// Current field index.
    pub position: usize,
}

impl PlayerSnapshot {
    /// The palette color for a player id.
    #[must_use]
    pub fn color_for(id: PlayerId) -> &'static str {
        PALETTE[id.raw() as usize % PALETTE.len()]
    }
}

/// Receives the per-turn change log and player snapshot.
///
/// Implementations must not fail: a sink that cannot deliver drops the
/// update and the game plays on.
pub trait Broadcast {
    /// Called once per turn, after the cascade has fully resolved.
    /// `events` is empty on a sleeping turn.
    fn publish(&mut self, events: &[MoveEvent], players: &[PlayerSnapshot]);
}

/// A sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopBroadcast;

impl Broadcast for NoopBroadcast {
    fn publish(&mut self, _events: &[MoveEvent], _players: &[PlayerSnapshot]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(
            PlayerSnapshot::color_for(PlayerId(0)),
            PlayerSnapshot::color_for(PlayerId(6))
        );
        assert_ne!(
            PlayerSnapshot::color_for(PlayerId(0)),
            PlayerSnapshot::color_for(PlayerId(1))
        );
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = PlayerSnapshot {
            id: PlayerId(1),
            name: "Duje".into(),
            color_hint: PlayerSnapshot::color_for(PlayerId(1)).into(),
            position: 12,
        };
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("color_hint"));
    }
}
