//! Deterministic RNG hierarchy.
//!
//! A master seed generates a deterministic sub-seed for each round index.
//! Sub-seeds are derived via BLAKE3 hashing, independently of thread
//! scheduling order, so a batch yields identical rounds whether it runs
//! sequentially or on a thread pool.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Deterministic RNG hierarchy.
///
/// The master seed is expanded into per-round sub-seeds using BLAKE3.
/// Because derivation is hash-based (not order-dependent), round `i` draws
/// the same doors no matter which rounds were played before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngHierarchy {
    master_seed: u64,
}

impl RngHierarchy {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Derive a deterministic sub-seed for a round.
    pub fn sub_seed(&self, round: u64) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(&round.to_le_bytes());
        let hash = hasher.finalize();
        let mut head = [0u8; 8];
        head.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(head)
    }

    /// Create a seeded StdRng for a round.
    pub fn rng_for(&self, round: u64) -> StdRng {
        StdRng::seed_from_u64(self.sub_seed(round))
    }
}
