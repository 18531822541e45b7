// Seeded Trial Streams
//
// Every trial draws from its own ChaCha stream keyed by
// SHA256(server_seed || client_seed || nonce), where the nonce is the trial
// index. Publishing the seed fingerprint up front and the seed itself
// afterwards lets anyone replay a recorded trial and check it.

use crate::error::GameError;
use crate::game::play_trial;
use crate::types::{SwitchPolicy, TrialRecord};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

// =============================================================================
// SEED DERIVATION
// =============================================================================

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

// =============================================================================
// VERIFICATION
// =============================================================================

// Replay one trial from revealed seed material and compare to the record
pub fn verify_trial(
    server_seed: &[u8; 32],
    client_seed: &str,
    nonce: u64,
    first_pick: Option<u8>,
    policy: SwitchPolicy,
    expected: &TrialRecord,
) -> Result<bool, GameError> {
    let mut rng = trial_rng(server_seed, client_seed, nonce);
    let replayed = play_trial(&mut rng, first_pick, policy)?;
    Ok(replayed == *expected)
}
