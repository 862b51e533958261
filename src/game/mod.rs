//! The game aggregate and turn scheduler.
//!
//! [`Game`] owns the board, the player registry, the turn index and the
//! dice. One call to [`Game::advance_turn`] is one turn: the current
//! player either sleeps a turn off or rolls and moves, the cascade runs
//! to completion, and the turn passes on. The game is over as soon as the
//! winning field has an occupant.
//!
//! The engine is single-threaded and synchronous. Pacing between turns
//! (the original server slept a second per turn for spectators) is the
//! caller's concern, as is abandoning a game: just stop calling
//! `advance_turn`.

pub mod broadcast;
pub mod registry;

pub use broadcast::{Broadcast, NoopBroadcast, PlayerSnapshot};
pub use registry::PlayerRegistry;

use tracing::debug;

use crate::board::Board;
use crate::core::{Dice, GameError, GameRng, Player, PlayerId};
use crate::engine::{resolve_move, MoveEvent};

/// What one call to [`Game::advance_turn`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Whose turn it was.
    pub player: PlayerId,
    /// The roll, or `None` on a sleeping turn.
    pub roll: Option<u32>,
    /// Every atomic relocation the turn caused, in order. Empty on a
    /// sleeping turn. This is the payload for [`Broadcast::publish`].
    pub events: Vec<MoveEvent>,
    /// Whether the winning field is now occupied.
    pub game_over: bool,
}

/// One running game: board, players, turn order, dice.
///
/// ## Usage
///
/// ```
/// use boardrace::{default_course, Board, Game, GameRng, NoopBroadcast};
///
/// let board = Board::new(default_course()).unwrap();
/// let mut game = Game::new("test game", board, GameRng::new(42));
/// game.add_player("Braca");
/// game.add_player("Šomi");
/// game.add_player("Duje");
///
/// let winner = game.run(&mut NoopBroadcast).unwrap();
/// assert_eq!(Some(winner), game.winner());
/// ```
#[derive(Clone, Debug)]
pub struct Game<D = GameRng> {
    name: String,
    board: Board,
    registry: PlayerRegistry,
    turn_index: usize,
    dice: D,
}

impl<D: Dice> Game<D> {
    /// Create a game on `board` with injected dice.
    pub fn new(name: impl Into<String>, board: Board, dice: D) -> Self {
        Self {
            name: name.into(),
            board,
            registry: PlayerRegistry::new(),
            turn_index: 0,
            dice,
        }
    }

    /// Display name of this game.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The course, including live occupancy.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        self.registry.all()
    }

    /// Look a player up by id.
    ///
    /// # Errors
    ///
    /// [`GameError::UnknownPlayer`] when the id was never registered.
    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.registry.by_id(id)
    }

    /// Index into the turn order of whoever plays next.
    #[must_use]
    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    /// Register a player on the home field, last in the turn order.
    pub fn add_player(&mut self, name: impl Into<String>) -> PlayerId {
        let id = self.registry.register(name);
        self.board.field_mut(0).arrive(id);
        id
    }

    /// Whether someone has reached the winning field.
    #[must_use]
    pub fn is_over(&self) -> bool {
        !self.board.occupants_of(self.board.last_index()).is_empty()
    }

    /// The winner: first player to occupy the winning field.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.board
            .occupants_of(self.board.last_index())
            .first()
            .copied()
    }

    /// Play one turn.
    ///
    /// The current player sleeps a turn off, or rolls and moves with the
    /// full cascade. The turn index always advances, win or sleep.
    ///
    /// # Errors
    ///
    /// [`GameError::UnknownPlayer`] when no players are registered yet.
    pub fn advance_turn(&mut self) -> Result<TurnOutcome, GameError> {
        if self.registry.is_empty() {
            return Err(GameError::UnknownPlayer(PlayerId::new(0)));
        }

        let current = &self.registry.all()[self.turn_index];
        let id = current.id;

        let (roll, events) = if current.is_sleeping() {
            let entry = &mut self.registry.all_mut()[self.turn_index];
            entry.sleep_remaining -= 1;
            debug!(name = %entry.name, remaining = entry.sleep_remaining, "sleeping");
            (None, Vec::new())
        } else {
            let from = current.position;
            let roll = self.dice.roll();
            debug!(name = %current.name, roll, "rolled");
            let events = resolve_move(
                &mut self.board,
                self.registry.all_mut(),
                id,
                from,
                from as i64 + i64::from(roll),
            )?;
            (Some(roll), events)
        };

        self.turn_index = (self.turn_index + 1) % self.registry.len();

        Ok(TurnOutcome {
            player: id,
            roll,
            events,
            game_over: self.is_over(),
        })
    }

    /// Read-only player snapshot for rendering and transport.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PlayerSnapshot> {
        self.registry
            .all()
            .iter()
            .map(|p| PlayerSnapshot {
                id: p.id,
                name: p.name.clone(),
                color_hint: PlayerSnapshot::color_for(p.id).to_owned(),
                position: p.position,
            })
            .collect()
    }

    /// Play turns until someone wins, publishing each turn's change log
    /// and snapshot to `sink`. Returns the winner.
    ///
    /// # Errors
    ///
    /// [`GameError::UnknownPlayer`] when no players are registered.
    pub fn run<B: Broadcast>(&mut self, sink: &mut B) -> Result<PlayerId, GameError> {
        loop {
            let outcome = self.advance_turn()?;
            let snapshot = self.snapshot();
            sink.publish(&outcome.events, &snapshot);
            if outcome.game_over {
                if let Some(winner) = self.winner() {
                    return Ok(winner);
                }
            }
        }
    }
}
