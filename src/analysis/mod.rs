// Pure derivation steps: window -> (price series, trend line -> trend series)
pub mod error;
pub mod series_builder;
pub mod trend_fit;
pub mod window;

// Re-export commonly used items
pub use error::DeriveError;
pub use series_builder::{build_price_series, build_trend_series, trend_series_name};
pub use trend_fit::fit_trend;
pub use window::extract_window;
