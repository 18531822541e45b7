//! Two-children puzzle sampler: seeded surveys of two-child families with
//! the conditional counts that separate the 1/2 and 1/3 answers.

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

pub mod error;
pub mod sampler;
pub mod seed;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use error::SurveyError;
pub use sampler::{run_survey, sample_family};
pub use seed::{expand_seed, seed_fingerprint, trial_rng};
pub use types::{Family, Gender, SurveyConfig, SurveySummary};
