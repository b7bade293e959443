//! Seed derivation for the mock generator.
//!
//! Every pool the generator produces is drawn from its own RNG. The RNG is
//! seeded from a hash of the generator's base seed, the kind of pool, and the
//! pool's key, so the same inputs always give the same entities and unrelated
//! pools do not share a random stream.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sha2::{Digest, Sha256};

/// A hashed pool key, used to seed one RNG.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct SeedKey(u64);

impl SeedKey {
    /// Derives a seed from the base seed, a pool kind (e.g. `"students"`) and
    /// the key parts identifying the pool.
    pub fn derive(base: u64, kind: &str, parts: &[&str]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(base.to_le_bytes());
        hasher.update(kind.as_bytes());
        for part in parts {
            // Separator keeps ("ab", "c") and ("a", "bc") apart
            hasher.update([0x1f]);
            hasher.update(part.as_bytes());
        }
        let result = hasher.finalize();

        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&result[..8]);
        Self(u64::from_le_bytes(bytes))
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.0)
    }
}

impl std::fmt::Display for SeedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
