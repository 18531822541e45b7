// Monty Hall Type Definitions

use serde::{Deserialize, Serialize};

// =============================================================================
// CONSTANTS
// =============================================================================

pub const DOOR_COUNT: u8 = 3; // Doors are labeled 0, 1, 2

// =============================================================================
// SWITCH POLICY
// =============================================================================

// Strategy applied after the host opens a goat door
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchPolicy {
    Always, // Switch every round (the classic 2/3 strategy)
    Never,  // Stay on the first pick (1/3)
    Random, // Fair coin per round (1/2)
}

impl SwitchPolicy {
    /// Theoretical win rate under this policy (helper for reporting,
    /// mirrors what the empirical frequency should converge to).
    pub fn theoretical_win_rate(&self) -> f64 {
        match self {
            SwitchPolicy::Always => 2.0 / 3.0,
            SwitchPolicy::Never => 1.0 / 3.0,
            SwitchPolicy::Random => 1.0 / 2.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SwitchPolicy::Always => "always-switch",
            SwitchPolicy::Never => "never-switch",
            SwitchPolicy::Random => "random-switch",
        }
    }
}

// =============================================================================
// TRIAL RECORD
// =============================================================================

// Full account of one round; enough to re-derive and verify it later
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrialRecord {
    pub target: u8,     // Door hiding the car
    pub first_pick: u8, // Contestant's original door
    pub revealed: u8,   // Goat door opened by the host
    pub final_pick: u8, // Door held when the round settled
    pub switched: bool,
    pub is_win: bool,
}

// =============================================================================
// SIMULATION CONFIG & SUMMARY
// =============================================================================

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SimConfig {
    pub trials: u64,
    pub policy: SwitchPolicy,
    /// Expanded to the server seed; same seed reproduces the whole run.
    pub seed: u64,
    /// Extra seed material mixed into every trial stream (may be empty).
    pub client_seed: String,
    /// `Some(door)` fixes the first pick for every trial; `None` draws it
    /// uniformly per trial.
    pub first_pick: Option<u8>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: 10_000,
            policy: SwitchPolicy::Always,
            seed: 0,
            client_seed: String::new(),
            first_pick: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SimSummary {
    pub trials: u64, // Always >= 1 for summaries produced by run_simulation
    pub wins: u64,
    pub policy: SwitchPolicy,
    /// Commitment to the server seed used for this batch (hex SHA-256).
    pub seed_fingerprint: String,
}

impl SimSummary {
    /// Empirical win frequency, the estimate of the theoretical rate.
    pub fn win_rate(&self) -> f64 {
        self.wins as f64 / self.trials as f64
    }

    /// Half-width of the 95% normal-approximation interval around the
    /// empirical rate: 1.96 * sqrt(p * (1 - p) / n).
    pub fn margin_of_error(&self) -> f64 {
        let p = self.win_rate();
        1.96 * (p * (1.0 - p) / self.trials as f64).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theoretical_rates() {
        assert!((SwitchPolicy::Always.theoretical_win_rate() - 2.0 / 3.0).abs() < 1e-12);
        assert!((SwitchPolicy::Never.theoretical_win_rate() - 1.0 / 3.0).abs() < 1e-12);
        assert!((SwitchPolicy::Random.theoretical_win_rate() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_summary_metrics() {
        let summary = SimSummary {
            trials: 100,
            wins: 50,
            policy: SwitchPolicy::Random,
            seed_fingerprint: String::new(),
        };
        assert!((summary.win_rate() - 0.5).abs() < 1e-12);
        // 1.96 * sqrt(0.25 / 100) = 1.96 * 0.05
        assert!((summary.margin_of_error() - 0.098).abs() < 1e-12);
    }
}
