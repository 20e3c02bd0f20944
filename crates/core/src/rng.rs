//! RNG module - seeded generator for dealing the table
//!
//! A small LCG is plenty for shuffling sixteen cards, and keeping it in-crate
//! means a seed reproduces the exact same layout on every platform.

use std::time::{SystemTime, UNIX_EPOCH};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    ///
    /// The seed is scrambled first so neighbouring seeds (a reset deals
    /// `seed + 1`) start from unrelated states.
    pub fn new(seed: u32) -> Self {
        let state = mix_seed(seed);
        // Avoid 0 state which would produce all zeros
        let state = if state == 0 { 1 } else { state };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates.
    ///
    /// Walks from the last index down to 1, swapping position `i` with a
    /// uniformly chosen `j` in `[0, i]`.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current generator state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Murmur3 32-bit finalizer. Bijective, and `mix_seed(0) == 0`.
fn mix_seed(seed: u32) -> u32 {
    let mut h = seed;
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// Seed derived from the wall clock, for sessions without a fixed seed.
pub fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(1);
    // Fold the high bits in so consecutive calls within one second still differ.
    (nanos ^ (nanos >> 32)) as u32
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
