// Two-Children Survey Sampler
//
// Draws many two-child families (independent fair draws, birth order kept)
// and tallies the events behind the classic conditional-probability puzzle:
// knowing the elder is a girl leaves P(both girls) at 1/2, while knowing
// only that at least one is a girl drops it to 1/3.

use crate::error::SurveyError;
use crate::seed::{expand_seed, seed_fingerprint, trial_rng};
use crate::types::{Family, Gender, SurveyConfig, SurveySummary};
use rand::Rng;
use tracing::{debug, info};

fn draw_gender<R: Rng>(rng: &mut R) -> Gender {
    if rng.gen::<bool>() {
        Gender::Girl
    } else {
        Gender::Boy
    }
}

/// Draw one family: two independent fair picks, elder first.
pub fn sample_family<R: Rng>(rng: &mut R) -> Family {
    let elder = draw_gender(rng);
    let younger = draw_gender(rng);
    Family { elder, younger }
}

/// Run a full survey under one configuration.
pub fn run_survey(config: &SurveyConfig) -> Result<SurveySummary, SurveyError> {
    // 1. Validate inputs
    if config.trials == 0 {
        return Err(SurveyError::DegenerateTrialCount);
    }

    // 2. Expand the seed once for the whole survey
    let server_seed = expand_seed(config.seed);
    let fingerprint = seed_fingerprint(&server_seed);
    debug!(fingerprint = %fingerprint, trials = config.trials, "server seed expanded");

    // 3. Sample each family on its own stream and tally
    let mut summary = SurveySummary {
        trials: 0,
        elder_girl: 0,
        both_girls: 0,
        at_least_one_girl: 0,
        seed_fingerprint: fingerprint,
    };
    for nonce in 0..config.trials {
        let mut rng = trial_rng(&server_seed, &config.client_seed, nonce);
        summary.record(sample_family(&mut rng));
    }

    info!(
        trials = summary.trials,
        elder_girl = summary.elder_girl,
        both_girls = summary.both_girls,
        at_least_one_girl = summary.at_least_one_girl,
        "survey complete"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rejects_zero_trials() {
        let config = SurveyConfig {
            trials: 0,
            ..SurveyConfig::default()
        };
        assert_eq!(run_survey(&config), Err(SurveyError::DegenerateTrialCount));
    }

    #[test]
    fn test_same_seed_same_summary() {
        let config = SurveyConfig {
            trials: 300,
            seed: 808,
            ..SurveyConfig::default()
        };
        assert_eq!(run_survey(&config).unwrap(), run_survey(&config).unwrap());
    }

    #[test]
    fn test_sample_family_hits_all_compositions() {
        // 64 draws miss a given composition with probability (3/4)^64.
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let mut seen = [false; 4];
        for _ in 0..64 {
            let family = sample_family(&mut rng);
            let idx = match (family.elder, family.younger) {
                (Gender::Girl, Gender::Girl) => 0,
                (Gender::Girl, Gender::Boy) => 1,
                (Gender::Boy, Gender::Girl) => 2,
                (Gender::Boy, Gender::Boy) => 3,
            };
            seen[idx] = true;
        }
        assert_eq!(seen, [true; 4], "some composition never sampled");
    }

    #[test]
    fn test_counts_are_ordered() {
        let config = SurveyConfig {
            trials: 2_000,
            seed: 17,
            ..SurveyConfig::default()
        };
        let summary = run_survey(&config).unwrap();

        assert_eq!(summary.trials, 2_000);
        assert!(summary.both_girls <= summary.elder_girl);
        assert!(summary.elder_girl <= summary.at_least_one_girl);
        assert!(summary.at_least_one_girl <= summary.trials);
    }
}
