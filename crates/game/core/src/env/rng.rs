//! Seed-addressed RNG oracle.
//!
//! All randomness in the simulation flows through this trait: loot draws,
//! battle variance, flee checks, monster spawns. Implementations must be
//! stateless and deterministic so a session replayed with the same game
//! seed and action sequence lands in the same state.

/// Deterministic random source addressed by seed.
///
/// Implementations must return the same value for the same seed; sessions
/// derive a fresh seed per roll via [`compute_seed`].
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Percentile roll in 0..100.
    fn percent(&self, seed: u64) -> u32 {
        self.next_u32(seed) % 100
    }

    /// True with the given percent probability.
    fn chance(&self, seed: u64, percent: u32) -> bool {
        self.percent(seed) < percent.min(100)
    }

    /// Random value in `[min, max]` inclusive.
    fn range_i32(&self, seed: u64, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (max - min + 1) as u32;
        min + (self.next_u32(seed) % span) as i32
    }

    /// Random index into a collection of the given length. Length zero
    /// returns zero; callers check emptiness first.
    fn index(&self, seed: u64, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u32(seed) as usize) % len
    }
}

/// PCG random number generator (PCG-XSH-RR variant).
///
/// Stateless: each call derives output purely from the seed, so the oracle
/// can be shared freely across a session without interior mutability.
///
/// Reference: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation: xorshift the high bits, then rotate by
    /// the topmost bits of state.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Derive a per-roll seed from the session seed and an event address.
///
/// `nonce` is the session's action counter; `context` distinguishes
/// multiple independent rolls inside one action (0 for the primary roll,
/// 1 for the next, and so on). Mixing constants follow SplitMix64.
pub fn compute_seed(game_seed: u64, nonce: u64, context: u32) -> u64 {
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}
