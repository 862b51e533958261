//! Field definitions.
//!
//! A [`FieldSpec`] is the construction-time description of one position on
//! the course. A [`Field`] is that description plus the live occupant
//! list. Teleport targets are an explicit `Option` — there is no sentinel
//! index, so field 0 is a legal target like any other.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;

/// Construction-time description of one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Position on the course, `0` is home, the last index wins.
    pub index: usize,
    /// Turns a player landing here must skip before rolling again.
    pub sleep_turns: u32,
    /// Forced relocation target for arrivals, if any.
    pub teleport_to: Option<usize>,
}

impl FieldSpec {
    /// A plain field with no penalty and no teleport.
    #[must_use]
    pub const fn plain(index: usize) -> Self {
        Self {
            index,
            sleep_turns: 0,
            teleport_to: None,
        }
    }

    /// A field that puts arrivals to sleep for `turns` turns.
    #[must_use]
    pub const fn sleep(index: usize, turns: u32) -> Self {
        Self {
            index,
            sleep_turns: turns,
            teleport_to: None,
        }
    }

    /// A field that relocates arrivals to `target`.
    #[must_use]
    pub const fn teleport(index: usize, target: usize) -> Self {
        Self {
            index,
            sleep_turns: 0,
            teleport_to: Some(target),
        }
    }
}

/// One position on the course, including who is standing on it.
///
/// `occupants` is kept in arrival order: index 0 arrived first. The
/// capture rule relies on that order to pick who gets bumped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    spec: FieldSpec,
    occupants: SmallVec<[PlayerId; 4]>,
}

impl Field {
    pub(crate) fn new(spec: FieldSpec) -> Self {
        Self {
            spec,
            occupants: SmallVec::new(),
        }
    }

    /// Position on the course.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.spec.index
    }

    /// Sleep penalty for arrivals.
    #[must_use]
    pub const fn sleep_turns(&self) -> u32 {
        self.spec.sleep_turns
    }

    /// Forced relocation target, if any.
    #[must_use]
    pub const fn teleport_to(&self) -> Option<usize> {
        self.spec.teleport_to
    }

    /// Players standing here, in arrival order.
    #[must_use]
    pub fn occupants(&self) -> &[PlayerId] {
        &self.occupants
    }

    pub(crate) fn arrive(&mut self, player: PlayerId) {
        self.occupants.push(player);
    }

    pub(crate) fn depart(&mut self, player: PlayerId) {
        self.occupants.retain(|&mut p| p != player);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_constructors() {
        assert_eq!(FieldSpec::plain(4).teleport_to, None);
        assert_eq!(FieldSpec::sleep(24, 2).sleep_turns, 2);
        assert_eq!(FieldSpec::teleport(17, 23).teleport_to, Some(23));
    }

    #[test]
    fn test_arrival_order_preserved() {
        let mut field = Field::new(FieldSpec::plain(10));
        field.arrive(PlayerId(2));
        field.arrive(PlayerId(0));
        field.arrive(PlayerId(1));
        assert_eq!(field.occupants(), &[PlayerId(2), PlayerId(0), PlayerId(1)]);

        field.depart(PlayerId(0));
        assert_eq!(field.occupants(), &[PlayerId(2), PlayerId(1)]);
    }
}
