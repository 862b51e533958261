//! Dice as an injectable capability.
//!
//! The scheduler never calls a global RNG. It rolls through the [`Dice`]
//! trait so tests can script exact sequences and replays stay
//! reproducible.
//!
//! ## Implementations
//!
//! - [`GameRng`]: seeded ChaCha8, the production source. Same seed, same
//!   game.
//! - [`ScriptedDice`]: replays a fixed list of rolls, cycling when
//!   exhausted.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A six-sided die.
pub trait Dice {
    /// Produce the next roll, uniform in `1..=6`.
    fn roll(&mut self) -> u32;
}

/// Deterministic dice backed by a seeded ChaCha8 stream.
///
/// ```
/// use boardrace::{Dice, GameRng};
///
/// let mut a = GameRng::new(42);
/// let mut b = GameRng::new(42);
/// for _ in 0..20 {
///     assert_eq!(a.roll(), b.roll());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Dice for GameRng {
    fn roll(&mut self) -> u32 {
        self.inner.gen_range(1..=6)
    }
}

/// Dice that replay a fixed sequence, cycling when exhausted.
///
/// Used by tests to drive a game down an exact path.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    rolls: Vec<u32>,
    next: usize,
}

impl ScriptedDice {
    /// Create scripted dice from a non-empty roll sequence.
    ///
    /// Panics if `rolls` is empty or contains a value outside `1..=6`.
    #[must_use]
    pub fn new(rolls: Vec<u32>) -> Self {
        assert!(!rolls.is_empty(), "scripted dice need at least one roll");
        assert!(
            rolls.iter().all(|r| (1..=6).contains(r)),
            "scripted rolls must be in 1..=6"
        );
        Self { rolls, next: 0 }
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> u32 {
        let roll = self.rolls[self.next];
        self.next = (self.next + 1) % self.rolls.len();
        roll
    }
}
