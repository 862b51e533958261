//! The static course: fields, the board built from them, and the default
//! 51-field layout.
//!
//! A board is immutable after construction except for the per-field
//! occupant lists, which only the movement engine touches.

pub mod field;
pub mod layout;

pub use field::{Field, FieldSpec};
pub use layout::{default_course, Board};
