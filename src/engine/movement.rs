//! The movement cascade.
//!
//! One roll can set off a chain of relocations: the mover lands, dislodges
//! whoever was standing there (knocked three fields back), and may then be
//! teleported onward — and every one of those relocations can trigger the
//! same rules again. [`resolve_move`] resolves the whole chain and returns
//! the atomic moves in the order they happened.
//!
//! ## Work-list instead of recursion
//!
//! The cascade is a depth-first process: a capture must fully play out
//! (including anything *it* triggers) before the mover's teleport hop.
//! Rather than recursing, pending relocations go on a LIFO stack — the
//! teleport hop is pushed first and the capture last, so the capture and
//! all of its follow-ons resolve before the hop. The stack also gives the
//! cascade a natural place for a bounded step count: boards that validate
//! never reach it, but capture/teleport interplay on an adversarial layout
//! cannot loop the engine either.
//!
//! ## Edge policy
//!
//! Relocation targets past the winning field make the relocation a silent
//! no-op. Targets below zero clamp to the home field. Neither is an error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::core::{GameError, Player, PlayerId};

/// How far back a captured player is knocked.
pub const CAPTURE_KNOCKBACK: i64 = 3;

/// One atomic relocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEvent {
    /// Who moved.
    pub player: PlayerId,
    /// Field the player left.
    pub from: usize,
    /// Field the player arrived on.
    pub to: usize,
}

/// A relocation waiting to be applied.
struct Pending {
    player: PlayerId,
    from: usize,
    /// Signed: capture knock-backs can aim below the home field.
    to: i64,
}

/// Move `player` from `from` toward `to`, resolving the full cascade.
///
/// Returns the atomic moves in the order they happened; empty when the
/// move was a no-op (overshoot past the winning field, or `from == to`).
///
/// # Errors
///
/// [`GameError::UnknownPlayer`] when `player` is not registered.
/// [`GameError::InvalidBoardConfiguration`] when the cascade exceeds its
/// step budget, which only an adversarial capture/teleport interplay can
/// cause.
pub fn resolve_move(
    board: &mut Board,
    players: &mut [Player],
    player: PlayerId,
    from: usize,
    to: i64,
) -> Result<Vec<MoveEvent>, GameError> {
    if !players.iter().any(|p| p.id == player) {
        return Err(GameError::UnknownPlayer(player));
    }

    let mut events = Vec::new();
    let mut stack = vec![Pending { player, from, to }];

    // Validated boards terminate long before this; see module docs.
    let budget = board.field_count() * (players.len() + 2);
    let mut steps = 0usize;

    while let Some(rel) = stack.pop() {
        if rel.to > board.last_index() as i64 {
            // Cannot overshoot the end.
            continue;
        }
        if rel.to == rel.from as i64 {
            continue;
        }
        let to = rel.to.max(0) as usize;

        steps += 1;
        if steps > budget {
            return Err(GameError::InvalidBoardConfiguration(format!(
                "movement cascade exceeded {budget} relocations"
            )));
        }

        apply(board, players, rel.player, rel.from, to)?;
        events.push(MoveEvent {
            player: rel.player,
            from: rel.from,
            to,
        });

        // Teleport hop for the mover: pushed first so the capture below
        // resolves ahead of it. The guard skips a hop straight back to
        // where this relocation came from.
        if let Some(target) = board.field(to).teleport_to() {
            if target != rel.from {
                debug!(field = to, target, "teleport field");
                stack.push(Pending {
                    player: rel.player,
                    from: to,
                    to: target as i64,
                });
            }
        }

        // Capture: the earliest arrival gets knocked back. Home is safe.
        let occupants = board.occupants_of(to);
        if occupants.len() > 1 && to != 0 {
            let bumped = occupants[0];
            debug!(%bumped, field = to, "capture, knocking prior occupant back");
            stack.push(Pending {
                player: bumped,
                from: to,
                to: to as i64 - CAPTURE_KNOCKBACK,
            });
        }
    }

    Ok(events)
}

/// Apply one atomic relocation: occupant lists, position, sleep penalty.
fn apply(
    board: &mut Board,
    players: &mut [Player],
    player: PlayerId,
    from: usize,
    to: usize,
) -> Result<(), GameError> {
    let entry = players
        .iter_mut()
        .find(|p| p.id == player)
        .ok_or(GameError::UnknownPlayer(player))?;

    debug!(name = %entry.name, from, to, "moving");

    board.field_mut(from).depart(player);
    board.field_mut(to).arrive(player);
    entry.position = to;
    entry.sleep_remaining = board.field(to).sleep_turns();

    Ok(())
}
