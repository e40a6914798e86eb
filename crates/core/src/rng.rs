//! RNG module - random sources for round generation
//!
//! Round generation only needs uniform reals in `[0, 1)`. [`RandomSource`] is
//! the seam: production play uses [`EntropyRandom`], tests and replays use the
//! seeded [`SimpleRng`], and [`FnSource`] adapts any closure.

use rand::{rngs::SmallRng, Rng, SeedableRng};

/// A source of uniform reals in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `[0, n)`, computed as `floor(next_f64() * n)`.
    ///
    /// Returns 0 when `n` is 0.
    fn next_below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        let v = (self.next_f64() * f64::from(n)).floor() as u32;
        // Guards against a misbehaving source returning exactly 1.0.
        v.min(n - 1)
    }

    /// Fair two-outcome coin: true when the draw lands in the lower half.
    fn next_coin(&mut self) -> bool {
        self.next_f64() < 0.5
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state; `SimpleRng::new(rng.state())` replays from here
    /// (except for a state of 0, which is remapped like a zero seed).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Non-deterministic source seeded from OS entropy.
#[derive(Debug, Clone)]
pub struct EntropyRandom {
    rng: SmallRng,
}

impl EntropyRandom {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl Default for EntropyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Adapts a closure producing uniform reals in `[0, 1)`.
///
/// ```
/// use colour_clicker_core::{FnSource, RandomSource};
///
/// let mut always_low = FnSource(|| 0.0);
/// assert_eq!(always_low.next_below(4), 0);
/// assert!(always_low.next_coin());
/// ```
pub struct FnSource<F>(pub F);

impl<F: FnMut() -> f64> RandomSource for FnSource<F> {
    fn next_f64(&mut self) -> f64 {
        (self.0)()
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// Handy for pinning exact round parameters in tests.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let v = self.draws[self.cursor % self.draws.len()];
        self.cursor = self.cursor.wrapping_add(1);
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_state_resumes_sequence() {
        let mut rng = SimpleRng::new(12345);
        for _ in 0..7 {
            rng.next_u32();
        }
        let mut resumed = SimpleRng::new(rng.state());
        for _ in 0..20 {
            assert_eq!(rng.next_u32(), resumed.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_f64_in_unit_interval() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "out of range: {v}");
        }

        let mut entropy = EntropyRandom::new();
        for _ in 0..1_000 {
            let v = entropy.next_f64();
            assert!((0.0..1.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn test_next_below_covers_range() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 9];
        for _ in 0..1_000 {
            let v = rng.next_below(9) as usize;
            assert!(v < 9);
            seen[v] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_next_below_clamps_bad_source() {
        let mut broken = FnSource(|| 1.0);
        assert_eq!(broken.next_below(4), 3);
        assert_eq!(broken.next_below(0), 0);
    }

    #[test]
    fn test_coin_is_roughly_fair() {
        let mut rng = SimpleRng::new(2024);
        let heads = (0..10_000).filter(|_| rng.next_coin()).count();
        assert!((4_500..5_500).contains(&heads), "heads = {heads}");
    }

    #[test]
    fn test_scripted_random_cycles() {
        let mut s = ScriptedRandom::new(vec![0.25, 0.75]);
        assert_eq!(s.next_f64(), 0.25);
        assert_eq!(s.next_f64(), 0.75);
        assert_eq!(s.next_f64(), 0.25);
    }

    #[test]
    fn test_boxed_source() {
        let mut boxed: Box<dyn RandomSource> = Box::new(FnSource(|| 0.5));
        assert_eq!(boxed.next_below(10), 5);
    }
}
