//! RNG oracle for deterministic catalog draws.
//!
//! Blind purchases and radio-order targets are the only random events in the
//! game. Both draw uniformly over the catalog through this trait, so tests
//! can script exact sequences and a replayed session reproduces the same
//! items from the same seed.

/// Deterministic random source.
///
/// Implementations must be pure functions of the seed: the same seed always
/// yields the same value. Statefulness lives in the session's nonce, not in
/// the oracle.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Pick a uniform index into a table of `len` entries.
    ///
    /// Returns 0 for an empty table; callers guard against empty catalogs
    /// before drawing.
    fn pick_index(&self, seed: u64, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.next_u32(seed) as usize % len
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR produces 32-bit output from 64-bit state with a single
/// multiply, an xorshift, and a rotate. Small, fast, and of good statistical
/// quality for game draws.
///
/// Reference: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// One LCG step: `state' = state * multiplier + increment (mod 2^64)`.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation over the stepped state.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Derives the seed for one random draw.
///
/// Mixes the session's base seed, the operation nonce, and a per-draw
/// context so that a buy draw and an order draw inside the same operation
/// stay independent. Constants are SplitMix64/FxHash multipliers.
pub fn compute_seed(game_seed: u64, nonce: u64, context: u32) -> u64 {
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step.
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
