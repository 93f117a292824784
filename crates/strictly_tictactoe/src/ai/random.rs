//! Random source for tie-breaking.
//!
//! Every random choice the engine makes (easy moves, medium corners and
//! fallbacks, ties between equally scored hard moves) goes through
//! [`RandomSource`], so a test can pin the choice with a stub or a seed.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Picks an index into a non-empty candidate list.
pub trait RandomSource {
    /// Returns a value in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Deterministic RNG for reproducible games.
///
/// Same seed, same sequence of picks.
#[must_use]
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// RNG seeded from the operating system.
#[must_use]
pub fn entropy_rng() -> ChaCha8Rng {
    ChaCha8Rng::from_entropy()
}

/// Chooses uniformly among candidates, or `None` if there are none.
pub fn choose<T: Copy>(candidates: &[T], rng: &mut (impl RandomSource + ?Sized)) -> Option<T> {
    if candidates.is_empty() {
        return None;
    }
    let index = rng.pick_index(candidates.len());
    debug_assert!(
        index < candidates.len(),
        "random source returned {index} for {} candidates",
        candidates.len()
    );
    candidates.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = seeded_rng(7);
        let mut b = seeded_rng(7);
        let picks_a: Vec<usize> = (0..20).map(|_| a.pick_index(9)).collect();
        let picks_b: Vec<usize> = (0..20).map(|_| b.pick_index(9)).collect();
        assert_eq!(picks_a, picks_b);
        assert!(picks_a.iter().all(|&i| i < 9));
    }

    #[test]
    fn test_choose_empty_is_none() {
        let mut rng = seeded_rng(1);
        assert_eq!(choose::<u8>(&[], &mut rng), None);
    }

    struct OutOfRange;

    impl RandomSource for OutOfRange {
        fn pick_index(&mut self, len: usize) -> usize {
            len
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "random source returned 3 for 3 candidates")]
    fn test_out_of_range_index_panics() {
        let _ = choose(&[1, 2, 3], &mut OutOfRange);
    }

    #[test]
    fn test_choose_single_candidate() {
        let mut rng = seeded_rng(1);
        assert_eq!(choose(&[42], &mut rng), Some(42));
    }
}
