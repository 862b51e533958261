//! # boardrace
//!
//! A chutes-and-ladders style board race engine.
//!
//! Players advance along a fixed course of fields. Some fields put the
//! arriving player to sleep for a number of turns, some forcibly teleport
//! the arrival elsewhere, and landing on an occupied field knocks the prior
//! occupant three fields back. A single roll can therefore trigger a chain
//! of relocations; the engine resolves the whole cascade and reports it as
//! an ordered list of atomic [`MoveEvent`]s.
//!
//! ## Design Principles
//!
//! 1. **Exclusive ownership**: [`Game`] owns all mutable state. Field
//!    occupant lists are mutated only inside the movement engine, never by
//!    the scheduler or by external layers.
//!
//! 2. **Deterministic by injection**: dice are an abstract [`Dice`]
//!    capability. [`GameRng`] gives seeded ChaCha8 rolls; [`ScriptedDice`]
//!    replays a fixed sequence for tests.
//!
//! 3. **Invalid boards don't construct**: non-contiguous field tables and
//!    non-terminating teleport cycles are rejected at [`Board::new`] time
//!    with [`GameError::InvalidBoardConfiguration`], not discovered
//!    mid-game.
//!
//! ## Modules
//!
//! - `core`: player identity, dice capability, error taxonomy
//! - `board`: immutable course definition and construction-time validation
//! - `engine`: the movement cascade (capture and teleport resolution)
//! - `game`: game aggregate, turn scheduler, broadcast collaborators

pub mod board;
pub mod core;
pub mod engine;
pub mod game;

// Re-export commonly used types
pub use crate::core::{Dice, GameError, GameRng, Player, PlayerId, ScriptedDice};

pub use crate::board::{default_course, Board, Field, FieldSpec};

pub use crate::engine::MoveEvent;

pub use crate::game::{Broadcast, Game, NoopBroadcast, PlayerSnapshot, TurnOutcome};
