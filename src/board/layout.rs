//! Board construction and validation.
//!
//! `Board::new` is the only way to get a board, and it refuses layouts the
//! engine cannot run safely:
//!
//! - the field table must cover `0..N-1` contiguously, in order;
//! - a teleport may not point at its own field or out of range;
//! - every teleport chain must terminate under the engine's reversal
//!   guard. The guard skips a hop whose target is the field the player
//!   just came from, so a mutual pair (`A` → `B`, `B` → `A`) is legal —
//!   the default course ships one at 28/34. A cycle of three or more
//!   fields never terminates and is rejected here rather than looped on
//!   at runtime.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{GameError, PlayerId};

use super::field::{Field, FieldSpec};

/// The immutable course plus live occupancy.
///
/// ## Usage
///
/// ```
/// use boardrace::{Board, default_course};
///
/// let board = Board::new(default_course()).unwrap();
/// assert_eq!(board.last_index(), 50);
/// assert!(board.occupants_of(0).is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    fields: Vec<Field>,
}

impl Board {
    /// Build a board from a contiguous field table.
    ///
    /// Returns [`GameError::InvalidBoardConfiguration`] when the table
    /// breaks a construction rule; see the module docs for the rules.
    pub fn new(specs: Vec<FieldSpec>) -> Result<Self, GameError> {
        if specs.len() < 2 {
            return Err(GameError::InvalidBoardConfiguration(
                "a course needs at least a home field and a winning field".into(),
            ));
        }

        let last = specs.len() - 1;
        for (position, spec) in specs.iter().enumerate() {
            if spec.index != position {
                return Err(GameError::InvalidBoardConfiguration(format!(
                    "field at position {position} declares index {}",
                    spec.index
                )));
            }
            if let Some(target) = spec.teleport_to {
                if target > last {
                    return Err(GameError::InvalidBoardConfiguration(format!(
                        "field {position} teleports to {target}, past the last field {last}"
                    )));
                }
                if target == position {
                    return Err(GameError::InvalidBoardConfiguration(format!(
                        "field {position} teleports to itself"
                    )));
                }
            }
        }

        for spec in &specs {
            check_chain_terminates(&specs, spec.index)?;
        }

        Ok(Self {
            fields: specs.into_iter().map(Field::new).collect(),
        })
    }

    /// The field at `index`. Panics if `index` is past the last field.
    #[must_use]
    pub fn field(&self, index: usize) -> &Field {
        &self.fields[index]
    }

    pub(crate) fn field_mut(&mut self, index: usize) -> &mut Field {
        &mut self.fields[index]
    }

    /// Index of the winning field.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.fields.len() - 1
    }

    /// Number of fields on the course.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Players standing on `index`, in arrival order.
    #[must_use]
    pub fn occupants_of(&self, index: usize) -> &[PlayerId] {
        self.fields[index].occupants()
    }
}

/// Walk the teleport chain starting at `start` exactly as the engine
/// would, with the worst-case entry (arriving from a field that is not
/// any chain member's target). The reversal guard stops mutual pairs; a
/// longer cycle revisits a field with the guard unable to fire.
fn check_chain_terminates(specs: &[FieldSpec], start: usize) -> Result<(), GameError> {
    let mut visited = FxHashSet::default();
    let mut prev: Option<usize> = None;
    let mut cur = start;

    loop {
        let Some(target) = specs[cur].teleport_to else {
            return Ok(());
        };
        if prev == Some(target) {
            // Arriving from the target itself: the guard skips this hop.
            return Ok(());
        }
        if !visited.insert(cur) {
            return Err(GameError::InvalidBoardConfiguration(format!(
                "teleport cycle through field {cur} never terminates"
            )));
        }
        prev = Some(cur);
        cur = target;
    }
}

/// The course the original game shipped: 51 fields, two sleep fields and
/// seventeen teleports, including the legal mutual pair 28/34.
#[must_use]
pub fn default_course() -> Vec<FieldSpec> {
    let mut specs: Vec<FieldSpec> = (0..51).map(FieldSpec::plain).collect();

    specs[5] = FieldSpec::teleport(5, 7);
    specs[6] = FieldSpec::teleport(6, 13);
    specs[8] = FieldSpec::teleport(8, 10);
    specs[11] = FieldSpec::teleport(11, 9);
    specs[14] = FieldSpec::teleport(14, 7);
    specs[17] = FieldSpec::teleport(17, 23);
    specs[22] = FieldSpec::teleport(22, 18);
    specs[24] = FieldSpec::sleep(24, 2);
    specs[25] = FieldSpec::teleport(25, 23);
    specs[26] = FieldSpec::teleport(26, 27);
    specs[28] = FieldSpec::teleport(28, 34);
    specs[34] = FieldSpec::teleport(34, 28);
    specs[35] = FieldSpec::teleport(35, 37);
    specs[39] = FieldSpec::teleport(39, 36);
    specs[42] = FieldSpec::sleep(42, 1);
    specs[44] = FieldSpec::teleport(44, 41);
    specs[46] = FieldSpec::teleport(46, 33);
    specs[48] = FieldSpec::teleport(48, 45);
    specs[49] = FieldSpec::teleport(49, 47);

    specs
}
