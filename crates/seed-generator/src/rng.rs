//! Mulberry32: a small, fast, seedable 32-bit generator.
//!
//! One `u32` of state, one addition and a xorshift-multiply mix per output.
//! Not suitable for anything security related; it exists so that a seed
//! reproduces the exact same dataset on every run and every platform.

use rand::{Error, RngCore, SeedableRng};

/// Increment added to the state before every output (the Weyl sequence step).
const GOLDEN_GAMMA: u32 = 0x6D2B_79F5;

/// Deterministic pseudo-random source shared by every stage of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a generator from the low 32 bits of `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            state: (seed & u64::from(u32::MAX)) as u32,
        }
    }

    /// Current internal state. Two generators with equal state produce equal
    /// sequences.
    pub fn state(&self) -> u32 {
        self.state
    }

    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let t = self.state;
        let mut r = (t ^ (t >> 15)).wrapping_mul(1 | t);
        r ^= r.wrapping_add((r ^ (r >> 7)).wrapping_mul(61 | r));
        r ^ (r >> 14)
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.step());
        let low = u64::from(self.step());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: u32::from_le_bytes(seed),
        }
    }

    /// Uses the low 32 bits directly so a configured seed maps onto the
    /// state one to one.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
