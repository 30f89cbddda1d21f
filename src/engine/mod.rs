pub mod delivery;
pub mod error;
pub mod messages;
pub mod orchestrator;
pub mod worker;

// Re-export key components
pub use delivery::{ChartSink, DeliveryError, DeliveryReport, deliver};
pub use error::PipelineError;
pub use messages::{PipelineOutcome, PipelineRequest};
pub use orchestrator::run_pipeline;
pub use worker::spawn_pipeline;
