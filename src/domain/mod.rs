// Value model shared by every stage of the pipeline
pub mod observation;
pub mod series;
pub mod window;

// Re-export commonly used types
pub use observation::{PriceObservation, SymbolHistory};
pub use series::{ChartStyle, NamedSeries, PipelineResult, SeriesPoint, SymbolSeries};
pub use window::{TrendLine, Window};
