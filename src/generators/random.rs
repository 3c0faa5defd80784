// src/generators/random.rs
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Source of uniform draws used by the generator.
///
/// Implementations must be usable for any number of sequential draws. They
/// are not required to be shareable between threads.
pub trait RandomSource {
    /// Returns a value uniformly distributed in `0..bound`. `bound` is never zero.
    fn next_below(&mut self, bound: usize) -> usize;

    /// Fisher-Yates shuffle driven by `next_below`; every permutation of
    /// `items` is equally likely when `next_below` is uniform.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_below(i + 1);
            items.swap(i, j);
        }
    }
}

/// Adapts a `rand` generator to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ChaCha20Rng> {
    pub fn from_entropy() -> Self {
        Self::new(ChaCha20Rng::from_entropy())
    }

    /// Reproducible source: the same seed always yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_below(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_below_bound() {
        let mut source = RngSource::seeded(7);
        for bound in 1..50 {
            for _ in 0..20 {
                assert!(source.next_below(bound) < bound);
            }
        }
    }

    #[test]
    fn same_seed_same_draws() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        let first: Vec<usize> = (0..32).map(|_| a.next_below(100)).collect();
        let second: Vec<usize> = (0..32).map(|_| b.next_below(100)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut source = RngSource::seeded(3);
        let original: Vec<char> = "aB3$xY9!qq".chars().collect();
        let mut shuffled = original.clone();
        source.shuffle(&mut shuffled);

        let mut before = original.clone();
        let mut after = shuffled.clone();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn shuffle_reaches_every_permutation_of_three() {
        let mut source = RngSource::seeded(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..600 {
            let mut items = ['a', 'b', 'c'];
            source.shuffle(&mut items);
            seen.insert(items);
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn shuffle_matches_rand_slice_shuffle() {
        let mut source = RngSource::seeded(21);
        let mut ours: Vec<u32> = (0..40).collect();
        source.shuffle(&mut ours);

        let mut rng = ChaCha20Rng::seed_from_u64(21);
        let mut theirs: Vec<u32> = (0..40).collect();
        theirs.shuffle(&mut rng);

        assert_eq!(ours, theirs);
    }

    #[test]
    fn shuffle_handles_empty_and_single() {
        let mut source = RngSource::seeded(0);
        let mut empty: [u8; 0] = [];
        source.shuffle(&mut empty);
        let mut single = ['z'];
        source.shuffle(&mut single);
        assert_eq!(single, ['z']);
    }
}
