//! Deterministic edge-weight sources.
//!
//! A graph is a function of `(vertex_count, seed)` and the generator that turns the seed
//! into weights. Two generators are available:
//!
//! - [`PrngKind::XorShift`] (default): `XorShiftRng::seed_from_u64(seed)`, weights drawn with
//!   `random_range(0..100)`.
//! - [`PrngKind::JavaLcg`]: the 48-bit linear congruential generator with the bounded
//!   rejection loop of `java.util.Random::nextInt(int)`, so weight matrices agree with
//!   Java programs seeded the same way.

use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use std::fmt;
use std::str::FromStr;

/// Exclusive upper bound of generated edge weights.
pub const MAX_WEIGHT: u8 = 100;

/// Produces the stream of edge weights in `[0, MAX_WEIGHT)`.
pub trait WeightSource {
    /// Draws the next weight.
    fn next_weight(&mut self) -> u8;
}

impl WeightSource for XorShiftRng {
    #[inline]
    fn next_weight(&mut self) -> u8 {
        self.random_range(0..MAX_WEIGHT)
    }
}

// ============================================================================
// PrngKind
// ============================================================================

/// Selects the generator used to derive weights from a seed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PrngKind {
    /// Xorshift128 seeded through `seed_from_u64`.
    #[default]
    XorShift,
    /// Java-compatible linear congruential generator.
    JavaLcg,
}

impl PrngKind {
    /// Builds a boxed weight source for `seed`.
    pub fn source(self, seed: i64) -> Box<dyn WeightSource> {
        match self {
            PrngKind::XorShift => Box::new(XorShiftRng::seed_from_u64(seed as u64)),
            PrngKind::JavaLcg => Box::new(JavaLcg::new(seed)),
        }
    }
}

impl fmt::Display for PrngKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrngKind::XorShift => f.write_str("xorshift"),
            PrngKind::JavaLcg => f.write_str("java"),
        }
    }
}

impl FromStr for PrngKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xorshift" => Ok(PrngKind::XorShift),
            "java" | "java-lcg" => Ok(PrngKind::JavaLcg),
            other => Err(format!("unknown generator {other:?} (expected xorshift or java)")),
        }
    }
}

// ============================================================================
// JavaLcg
// ============================================================================

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const ADDEND: u64 = 0xB;
const MASK: u64 = (1u64 << 48) - 1;

/// 48-bit LCG with the same state transition and output taps as `java.util.Random`.
#[derive(Clone, Debug)]
pub struct JavaLcg {
    state: u64,
}

impl JavaLcg {
    /// Seeds the generator; the seed is scrambled exactly as the Java constructor does.
    pub fn new(seed: i64) -> Self {
        Self {
            state: (seed as u64 ^ MULTIPLIER) & MASK,
        }
    }

    /// Advances the state and returns its top `bits` bits (`1..=32`).
    #[inline]
    fn next_bits(&mut self, bits: u32) -> i32 {
        debug_assert!((1..=32).contains(&bits));
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & MASK;
        (self.state >> (48 - bits)) as i32
    }

    /// Uniform `i32` over the full range.
    pub fn next_i32(&mut self) -> i32 {
        self.next_bits(32)
    }

    /// Uniform integer in `[0, bound)`.
    ///
    /// # Panics
    /// Panics if `bound <= 0`.
    pub fn next_bounded(&mut self, bound: i32) -> i32 {
        assert!(bound > 0, "bound must be positive");

        if bound & bound.wrapping_neg() == bound {
            // Power of two: take the high bits.
            return ((i64::from(bound) * i64::from(self.next_bits(31))) >> 31) as i32;
        }

        let m = bound - 1;
        let mut u = self.next_bits(31);
        loop {
            let r = u % bound;
            // Reject the partial bucket at the top of the range; the sum overflows there.
            if u.wrapping_sub(r).wrapping_add(m) >= 0 {
                return r;
            }
            u = self.next_bits(31);
        }
    }
}

impl WeightSource for JavaLcg {
    #[inline]
    fn next_weight(&mut self) -> u8 {
        self.next_bounded(i32::from(MAX_WEIGHT)) as u8
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn java_lcg_matches_known_sequence() {
        // new java.util.Random(0).nextInt() twice
        let mut rng = JavaLcg::new(0);
        assert_eq!(rng.next_i32(), -1_155_484_576);
        assert_eq!(rng.next_i32(), -723_955_400);
    }

    #[test]
    fn java_lcg_weights_match_known_sequence() {
        // new java.util.Random(42).nextInt(100), six draws
        let mut source = PrngKind::JavaLcg.source(42);
        let weights: Vec<u8> = (0..6).map(|_| source.next_weight()).collect();
        assert_eq!(weights, vec![30, 63, 48, 84, 70, 25]);
    }

    #[test]
    fn java_lcg_bounded_stays_in_range() {
        let mut rng = JavaLcg::new(-7);
        for bound in [1, 2, 3, 64, 100, 1_000_003, i32::MAX] {
            for _ in 0..200 {
                let x = rng.next_bounded(bound);
                assert!((0..bound).contains(&x), "{x} outside [0, {bound})");
            }
        }
    }

    #[test]
    fn sources_are_deterministic_per_seed() {
        for kind in [PrngKind::XorShift, PrngKind::JavaLcg] {
            let mut a = kind.source(42);
            let mut b = kind.source(42);
            for _ in 0..500 {
                let (x, y) = (a.next_weight(), b.next_weight());
                assert_eq!(x, y);
                assert!(x < MAX_WEIGHT);
            }
        }
    }

    #[test]
    fn different_seeds_give_different_streams() {
        let mut a = PrngKind::XorShift.source(1);
        let mut b = PrngKind::XorShift.source(2);
        let xs: Vec<u8> = (0..32).map(|_| a.next_weight()).collect();
        let ys: Vec<u8> = (0..32).map(|_| b.next_weight()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn prng_kind_parses_and_displays() {
        assert_eq!("xorshift".parse::<PrngKind>(), Ok(PrngKind::XorShift));
        assert_eq!("java".parse::<PrngKind>(), Ok(PrngKind::JavaLcg));
        assert!("mt19937".parse::<PrngKind>().is_err());
        assert_eq!(PrngKind::JavaLcg.to_string(), "java");
    }
}
