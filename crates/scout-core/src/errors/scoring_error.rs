/// Scoring engine errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("weight for metric {metric} is not finite: {value}")]
    NonFiniteWeight { metric: String, value: f64 },

    #[error("unknown weight profile: {profile}")]
    UnknownProfile { profile: String },
}
