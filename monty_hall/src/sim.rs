// Batch Trial Runner

use crate::error::SimError;
use crate::game::{play_trial, validate_door};
use crate::seed::{expand_seed, seed_fingerprint, trial_rng};
use crate::types::{SimConfig, SimSummary};
use tracing::{debug, info};

/// Run a full batch of trials under one configuration.
///
/// Each trial gets its own RNG stream keyed by the trial index, so the run
/// is reproducible from `config.seed` alone and any single trial can be
/// re-derived without replaying the ones before it.
pub fn run_simulation(config: &SimConfig) -> Result<SimSummary, SimError> {
    // 1. Validate inputs
    if config.trials == 0 {
        return Err(SimError::DegenerateTrialCount);
    }
    if let Some(door) = config.first_pick {
        validate_door(door)?;
    }

    // 2. Expand the seed once for the whole batch
    let server_seed = expand_seed(config.seed);
    let fingerprint = seed_fingerprint(&server_seed);
    debug!(fingerprint = %fingerprint, trials = config.trials, "server seed expanded");

    // 3. Run each trial on its own stream
    let mut wins: u64 = 0;
    for nonce in 0..config.trials {
        let mut rng = trial_rng(&server_seed, &config.client_seed, nonce);
        let record = play_trial(&mut rng, config.first_pick, config.policy)?;
        if record.is_win {
            wins += 1;
        }
    }

    // 4. Aggregate
    let summary = SimSummary {
        trials: config.trials,
        wins,
        policy: config.policy,
        seed_fingerprint: fingerprint,
    };

    info!(
        trials = summary.trials,
        wins = summary.wins,
        win_rate = summary.win_rate(),
        policy = config.policy.label(),
        "simulation complete"
    );

    Ok(summary)
}
