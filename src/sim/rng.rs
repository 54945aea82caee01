//! Injectable randomness
//!
//! Every random draw in the simulation goes through [`RandomSource`], so a run
//! is fully determined by (state, dt, draws). Gameplay uses a seeded PCG
//! stream; tests replay a fixed sequence.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform integers over a closed range
pub trait RandomSource {
    /// Uniform integer in `low..=high`
    ///
    /// Implementations must stay inside the range; callers index with the result.
    fn uniform(&mut self, low: u32, high: u32) -> u32;
}

/// Seeded PCG generator used for real play
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: u64,
    rng: Pcg32,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRng {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        self.rng.random_range(low..=high)
    }
}

/// Replays a fixed list of values, cycling when exhausted
///
/// Values are clamped into the requested range so a single script can feed
/// draws of different widths.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRng {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        if self.values.is_empty() {
            return low;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_stays_in_range() {
        let mut rng = SeededRng::new(42);
        for _ in 0..1000 {
            let v = rng.uniform(1, 4);
            assert!((1..=4).contains(&v));
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = SeededRng::new(7);
        let mut b = SeededRng::new(7);
        for _ in 0..50 {
            assert_eq!(a.uniform(1, 100), b.uniform(1, 100));
        }
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_sequence_rng_cycles_and_clamps() {
        let mut rng = SequenceRng::new(vec![3, 200]);
        assert_eq!(rng.uniform(1, 100), 3);
        assert_eq!(rng.uniform(1, 100), 100);
        assert_eq!(rng.uniform(1, 100), 3);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_empty_sequence_returns_low() {
        let mut rng = SequenceRng::new(Vec::new());
        assert_eq!(rng.uniform(15, 104), 15);
    }
}
