use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub mod combat;
pub mod entity;
pub mod session;

pub use combat::{AttackOutcome, attack, heal};
pub use entity::{Class, Entity};
pub use session::{ActionError, EndState, EntityView, PlayerMove, RosterView, Session, TurnReport};

/// Damage and heal rolls swing the base value by a uniform draw in
/// `[-SWING, SWING]`.
pub const SWING: i32 = 20;

pub struct Dice {
    rng: ChaCha8Rng,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        Self { rng: ChaCha8Rng::from_entropy() }
    }

    /// Uniform roll in `[-SWING, SWING]`, fresh draw per call.
    pub fn swing(&mut self) -> i32 {
        self.rng.gen_range(-SWING..=SWING)
    }

    /// Uniform index into a roster of `len` entries. `len` must be nonzero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
