//! Production random source backed by the `rand` crate.

use rand::Rng;

use crate::traits::RandomSource;

/// [`RandomSource`] drawing from the thread-local RNG.
#[derive(Debug, Default)]
pub struct ThreadRngSource;

impl ThreadRngSource {
    /// Create a new thread-local random source.
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRngSource {
    fn pick(&mut self, low: u16, high: u16) -> u16 {
        rand::rng().random_range(low..=high)
    }
}
