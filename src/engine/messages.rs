use std::sync::Arc;
use std::time::Duration;

use crate::data::PriceHistorySource;
use crate::domain::PipelineResult;
use crate::engine::error::PipelineError;

/// A request to chart a set of symbols
#[derive(Clone)]
pub struct PipelineRequest {
    pub symbols: Vec<String>,
    pub interval: usize,
    // Shared retrieval capability, read-only across symbol tasks
    pub source: Arc<dyn PriceHistorySource>,
}

/// The result returned to the UI thread. Produced exactly once per request.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub symbols: Vec<String>,
    pub elapsed: Duration,
    pub result: Result<PipelineResult, PipelineError>,
}
