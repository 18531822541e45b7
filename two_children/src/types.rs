// Two-Children Survey Types

use serde::{Deserialize, Serialize};

// =============================================================================
// FAMILY
// =============================================================================

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Girl,
    Boy,
}

// One sampled family, birth order preserved
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Family {
    pub elder: Gender,
    pub younger: Gender,
}

impl Family {
    pub fn elder_is_girl(&self) -> bool {
        self.elder == Gender::Girl
    }

    pub fn both_girls(&self) -> bool {
        self.elder == Gender::Girl && self.younger == Gender::Girl
    }

    pub fn at_least_one_girl(&self) -> bool {
        self.elder == Gender::Girl || self.younger == Gender::Girl
    }
}

// =============================================================================
// SURVEY CONFIG & SUMMARY
// =============================================================================

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SurveyConfig {
    pub trials: u64,
    /// Expanded to the server seed; same seed reproduces the whole survey.
    pub seed: u64,
    /// Extra seed material mixed into every trial stream (may be empty).
    pub client_seed: String,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            trials: 10_000,
            seed: 0,
            client_seed: String::new(),
        }
    }
}

/// Counts accumulated over a survey, plus the conditional ratios the puzzle
/// is about. Ratios are `None` when their conditioning event never occurred,
/// which can happen at tiny trial counts.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SurveySummary {
    pub trials: u64,
    pub elder_girl: u64,
    pub both_girls: u64,
    pub at_least_one_girl: u64,
    /// Commitment to the server seed used for this survey (hex SHA-256).
    pub seed_fingerprint: String,
}

impl SurveySummary {
    pub(crate) fn record(&mut self, family: Family) {
        self.trials += 1;
        if family.elder_is_girl() {
            self.elder_girl += 1;
        }
        if family.both_girls() {
            self.both_girls += 1;
        }
        if family.at_least_one_girl() {
            self.at_least_one_girl += 1;
        }
    }

    /// P(both girls | elder is a girl), approximately 1/2.
    pub fn p_both_given_elder_girl(&self) -> Option<f64> {
        if self.elder_girl == 0 {
            return None;
        }
        Some(self.both_girls as f64 / self.elder_girl as f64)
    }

    /// P(both girls | at least one girl), approximately 1/3.
    pub fn p_both_given_at_least_one(&self) -> Option<f64> {
        if self.at_least_one_girl == 0 {
            return None;
        }
        Some(self.both_girls as f64 / self.at_least_one_girl as f64)
    }

    /// P(elder is a girl), approximately 1/2.
    pub fn p_elder_girl(&self) -> f64 {
        self.elder_girl as f64 / self.trials as f64
    }

    /// P(at least one girl), approximately 3/4.
    pub fn p_at_least_one_girl(&self) -> f64 {
        self.at_least_one_girl as f64 / self.trials as f64
    }
}
