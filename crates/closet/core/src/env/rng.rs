//! RNG oracle for deterministic random piece selection.
//!
//! Shuffle results must be replayable: the same session seed and transition
//! sequence always picks the same pieces, so tests assert exact outcomes
//! instead of statistical ones. Implementations are pure functions of the
//! seed they are handed.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values given
/// the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Pick a uniformly random index into a slice of length `len`.
    ///
    /// Returns 0 for `len <= 1`.
    fn pick_index(&self, seed: u64, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        (self.next_u32(seed) as usize) % len
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Fast, small, and passes
/// statistical tests, which is all shuffle selection needs.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the PCG state by one LCG step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Compute a deterministic seed for one random event in a composer session.
///
/// Combines the entropy sources so every roll in a session is unique:
///
/// * `session_seed` - set when the composer session starts
/// * `nonce` - transition sequence number (increments each engine execute)
/// * `slot_index` - slot the roll is for (layer rolls use the Top index)
/// * `context` - distinguishes multiple rolls inside one transition, e.g.
///   `refresh_all` rolling all four slots in a single apply
pub fn compute_seed(session_seed: u64, nonce: u64, slot_index: u32, context: u32) -> u64 {
    // Mix inputs with SplitMix64/FxHash multipliers and a final avalanche.
    let mut hash = session_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (slot_index as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
