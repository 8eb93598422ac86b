//! Weighted-die Monte Carlo experiments.
//!
//! Build [`Die`] values with arbitrary unique symbolic faces and adjustable
//! per-face weights, bundle similar dice into a [`Game`], play it for some
//! number of rolls, and hand the played game to an [`Analyzer`] for jackpot,
//! face-count, combination, and permutation statistics.
//!
//! All sampling goes through a caller-supplied [`rand::Rng`]; use
//! [`seeded_rng`] for reproducible runs.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod analyzer;
pub mod die;
pub mod error;
pub mod face;
pub mod game;

pub use analyzer::{Analyzer, FaceCounts};
pub use die::Die;
pub use error::{DiceError, DiceResult};
pub use face::Face;
pub use game::{Form, Game, ResultsView, RollRecord, RollTable};

/// Deterministic RNG for a simulation run. Independent runs should use
/// independently seeded generators.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
