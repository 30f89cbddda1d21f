use thiserror::Error;

/// Failures while turning a retrieved history into chart series.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeriveError {
    #[error("insufficient data: need {required} observations, history has {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("empty input: {0}")]
    EmptyInput(&'static str),
}
