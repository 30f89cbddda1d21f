use thiserror::Error;
use tokio::task::JoinError;

use crate::analysis::DeriveError;

/// Why a pipeline run produced no result. Every per-symbol variant names the
/// symbol that failed.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    #[error("retrieval failed for {symbol}: {source:#}")]
    Retrieval {
        symbol: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("{symbol}: {source}")]
    Derivation {
        symbol: String,
        #[source]
        source: DeriveError,
    },

    #[error("worker for {symbol} did not complete: {source}")]
    Worker {
        symbol: String,
        #[source]
        source: JoinError,
    },
}

impl PipelineError {
    /// The symbol whose branch failed, if the failure was per-symbol.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            PipelineError::EmptyInput(_) => None,
            PipelineError::Retrieval { symbol, .. }
            | PipelineError::Derivation { symbol, .. }
            | PipelineError::Worker { symbol, .. } => Some(symbol),
        }
    }

    pub fn is_insufficient_data(&self) -> bool {
        matches!(
            self,
            PipelineError::Derivation {
                source: DeriveError::InsufficientData { .. },
                ..
            }
        )
    }
}
