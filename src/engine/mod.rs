//! Movement resolution: the capture/teleport cascade.

pub mod movement;

pub use movement::{resolve_move, MoveEvent, CAPTURE_KNOCKBACK};
