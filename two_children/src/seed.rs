// Seeded Trial Streams
//
// Same commitment scheme as the Monty Hall engine: each trial draws from a
// ChaCha stream keyed by SHA256(server_seed || client_seed || nonce).

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

// Stretch a bare u64 into 32 bytes of server seed material
pub fn expand_seed(seed: u64) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_be_bytes());
    hasher.finalize().into()
}

// Derive the RNG for one trial from seed material and the trial's nonce
pub fn trial_rng(server_seed: &[u8; 32], client_seed: &str, nonce: u64) -> ChaCha8Rng {
    let mut hasher = Sha256::new();
    hasher.update(server_seed);
    hasher.update(client_seed.as_bytes());
    hasher.update(nonce.to_be_bytes());
    let key: [u8; 32] = hasher.finalize().into();
    ChaCha8Rng::from_seed(key)
}

// Hash of the server seed, safe to publish before any trial runs
pub fn seed_fingerprint(server_seed: &[u8; 32]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(server_seed);
    hex::encode(hasher.finalize())
}
