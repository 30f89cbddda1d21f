use poll_promise::Promise;
use tokio::runtime::Handle;

use super::messages::{PipelineOutcome, PipelineRequest};
use super::orchestrator::run_pipeline;

/// Runs one pipeline on the given runtime and resolves the promise with the
/// complete outcome. The caller polls the promise from the UI thread, which
/// is the only place the chart is mutated.
pub fn spawn_pipeline(runtime: Handle, req: PipelineRequest) -> Promise<PipelineOutcome> {
    Promise::spawn_thread("pipeline", move || {
        let start = std::time::Instant::now();
        let result = runtime.block_on(run_pipeline(&req.symbols, req.source, req.interval));

        PipelineOutcome {
            symbols: req.symbols,
            elapsed: start.elapsed(),
            result,
        }
    })
}
