use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurveyError {
    #[error("trial count must be at least 1")]
    DegenerateTrialCount,
}
