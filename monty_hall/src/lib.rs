//! Monty Hall trial engine: seeded batch simulation plus an interactive
//! hosted round, with replayable per-trial randomness.

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

pub mod error;
pub mod game;
pub mod seed;
pub mod session;
pub mod sim;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use error::{GameError, SimError};
pub use game::{host_reveal, pick_target, play_trial, switch_choice, validate_door};
pub use seed::{expand_seed, seed_fingerprint, trial_rng, verify_trial};
pub use session::{parse_door_reply, parse_switch_reply, play_hosted, Contestant, HostedRound};
pub use sim::run_simulation;
pub use types::{SimConfig, SimSummary, SwitchPolicy, TrialRecord, DOOR_COUNT};
