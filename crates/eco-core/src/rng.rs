//! Seedable random-number source for the environment model.
//!
//! Only the watcher agent draws random numbers (temperature and
//! precipitation noise), so a single simulation-level RNG is enough: it is
//! moved into the watcher's thread and never shared.
//!
//! The [`RandomSource`] trait is the seam between the environment model and
//! the generator, which lets tests substitute a fixed-noise source.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Supplies uniform floats in `[low, high)`.
pub trait RandomSource: Send {
    fn ranf(&mut self, low: f32, high: f32) -> f32;
}

/// Simulation-level RNG.  The same seed always produces identical weather.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for SimRng {
    /// Degenerate ranges (`low >= high`) return `low` rather than panicking.
    #[inline]
    fn ranf(&mut self, low: f32, high: f32) -> f32 {
        if low < high {
            self.0.gen_range(low..high)
        } else {
            low
        }
    }
}
