//! Per-call random source backed by PCG32.
//!
//! Every generation call owns its own [`CaptchaRng`], so concurrent calls
//! never share mutable RNG state. A fixed seed reproduces an image exactly.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Wrapper around PCG32 with the sampling helpers the painters need.
#[derive(Clone)]
pub struct CaptchaRng {
    inner: Pcg32,
}

impl CaptchaRng {
    /// Create an RNG from a fixed 64-bit seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::thread_rng().gen::<u64>())
    }

    /// Use `seed` when given, otherwise fall back to entropy.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Generate a random f64 in the range [0.0, 1.0).
    #[inline]
    pub fn gen_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Uniform integer in `[0, n)`. Returns 0 when `n` is 0, so geometry
    /// derived from very small canvases degrades instead of panicking.
    #[inline]
    pub fn below(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.inner.gen_range(0..n)
        }
    }

    /// Generate a random value in the given range.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.inner.gen_range(range)
    }

    /// Fair coin flip.
    #[inline]
    pub fn gen_bool(&mut self) -> bool {
        self.below(2) == 0
    }

    /// Pick one element of a non-empty slice uniformly.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.inner.gen_range(0..items.len());
        items.get(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_output() {
        let mut rng1 = CaptchaRng::from_seed(42);
        let mut rng2 = CaptchaRng::from_seed(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_f64(), rng2.gen_f64());
        }
    }

    #[test]
    fn test_different_seeds_produce_different_output() {
        let mut rng1 = CaptchaRng::from_seed(42);
        let mut rng2 = CaptchaRng::from_seed(43);

        let any_different = (0..10).any(|_| rng1.gen_f64() != rng2.gen_f64());
        assert!(any_different);
    }

    #[test]
    fn test_below_zero_is_zero() {
        let mut rng = CaptchaRng::from_seed(7);
        for _ in 0..10 {
            assert_eq!(rng.below(0), 0);
        }
    }

    #[test]
    fn test_below_stays_in_range() {
        let mut rng = CaptchaRng::from_seed(7);
        for _ in 0..1000 {
            assert!(rng.below(9) < 9);
        }
    }

    #[test]
    fn test_choose() {
        let mut rng = CaptchaRng::from_seed(1);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());

        let items = [1, 2, 3];
        for _ in 0..50 {
            let picked = *rng.choose(&items).unwrap();
            assert!(items.contains(&picked));
        }
    }
}
